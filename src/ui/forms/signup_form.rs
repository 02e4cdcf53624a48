//! Sign-up card rendering

use super::field_renderer::{draw_error, draw_field};
use crate::state::{AppState, Field, Spotlight, Tilt};
use crate::ui::components::render_button;
use crate::ui::layout::card_regions;
use crate::ui::widgets::{blend, shade_border};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Resting border color
const BORDER_BASE: (u8, u8, u8) = (88, 91, 112);
/// Border color directly under the pointer
const BORDER_GLOW: (u8, u8, u8) = (137, 220, 235);

/// Draw the form card with its pointer lighting
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            " Sign Up ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(title_alignment(state.spotlight.tilt(area)))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(border_color(0.0)));
    frame.render_widget(block, area);
    light_border(frame, area, &state.spotlight);

    let regions = card_regions(area);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "Create your account",
        Style::default().fg(Color::Gray),
    )))
    .centered();
    frame.render_widget(subtitle, regions.subtitle);

    for field in Field::ALL {
        let index = field.index();
        draw_field(frame, regions.fields[index], field, &state.form);
        draw_error(frame, regions.errors[index], field, &state.form);
    }

    let status = state.status();
    let label = if status.is_loading() {
        format!("{} {}", state.submission.spinner(), status.button_label())
    } else {
        status.button_label().to_string()
    };
    render_button(
        frame,
        regions.button,
        &label,
        state.form.is_buttons_row_active(),
        !status.is_loading(),
    );
}

fn border_color(intensity: f32) -> Color {
    blend(BORDER_BASE, BORDER_GLOW, intensity)
}

/// The card leans toward the pointer by sliding its title
fn title_alignment(tilt: Tilt) -> Alignment {
    match tilt {
        Tilt::Left => Alignment::Left,
        Tilt::Center => Alignment::Center,
        Tilt::Right => Alignment::Right,
    }
}

/// Brighten border cells near the pointer
fn light_border(frame: &mut Frame, area: Rect, spotlight: &Spotlight) {
    if spotlight.pointer().is_none() {
        return;
    }
    shade_border(frame.buffer_mut(), area, |x, y| {
        let intensity = spotlight.intensity_at(x, y);
        (intensity > 0.0).then(|| border_color(intensity))
    });
}

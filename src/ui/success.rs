//! Success panel shown after the simulated submission completes

use super::components::render_button;
use super::layout::success_regions;
use crate::state::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            " Welcome ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(ratatui::layout::Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(block, area);

    let regions = success_regions(area);
    frame.render_widget(
        Paragraph::new(body_lines(state))
            .centered()
            .wrap(Wrap { trim: true }),
        regions.body,
    );

    render_button(frame, regions.button, "Sign up another", true, true);
}

fn body_lines(state: &AppState) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let name = state.form.data.name.trim();
    let greeting = if name.is_empty() {
        "Thanks for signing up.".to_string()
    } else {
        format!("Thanks, {name}.")
    };

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "✔  You're on the list!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(greeting),
        Line::from(format!("We'll be in touch at {}.", state.form.data.email)),
        Line::default(),
    ];

    if let Some(receipt) = &state.submission.receipt {
        lines.push(Line::from(vec![
            Span::styled("Reference  ", label),
            Span::styled(
                receipt.short_reference(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Submitted  ", label),
            Span::raw(receipt.submitted_at.format("%H:%M:%S").to_string()),
        ]));
    }

    lines
}

//! Floating-label input rendering

use crate::state::{Field, SignupForm};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Draw one input. The label rests inside the box while the field is empty
/// and unfocused, and floats into the border otherwise.
pub fn draw_field(frame: &mut Frame, area: Rect, field: Field, form: &SignupForm) {
    let is_active = form.active_field() == Some(field);
    let has_error = form.errors.contains_key(&field);

    let accent = if has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));

    let content = if form.is_label_floating(field) {
        block = block.title(Span::styled(
            format!(" {} ", field.label()),
            Style::default().fg(accent),
        ));

        // Keep room for the cursor
        let width = area.width.saturating_sub(3) as usize;
        let value = visible_tail(form.data.get(field), width);

        let mut spans = vec![Span::styled(value, Style::default().fg(Color::White))];
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            if form.data.get(field).is_empty() {
                spans.push(Span::styled(
                    field.hint(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ));
            }
        }
        Line::from(spans)
    } else {
        Line::from(Span::styled(field.label(), Style::default().fg(Color::Gray)))
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Inline validation message under a field; blank when the field is valid
pub fn draw_error(frame: &mut Frame, area: Rect, field: Field, form: &SignupForm) {
    if let Some(message) = form.error_for(field) {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// The last `width` characters of `value`, so the cursor end stays visible
fn visible_tail(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len <= width {
        value.to_string()
    } else {
        value.chars().skip(len - width).collect()
    }
}

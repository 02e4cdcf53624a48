//! Backdrop rendering

use super::widgets::blend;
use crate::state::BackdropState;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Color of the art before it starts fading in
const FADE_FROM: (u8, u8, u8) = (24, 24, 32);
/// Color of the fully visible art
const FADE_TO: (u8, u8, u8) = (108, 112, 134);

/// Tile the backdrop art across `area` at its current opacity
pub fn draw(frame: &mut Frame, area: Rect, backdrop: &BackdropState) {
    if !backdrop.is_shown() || backdrop.lines.is_empty() {
        return;
    }

    let style = Style::default().fg(blend(FADE_FROM, FADE_TO, backdrop.opacity));
    let lines: Vec<Line> = tile(&backdrop.lines, area.width as usize, area.height as usize)
        .into_iter()
        .map(|row| Line::styled(row, style))
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Repeat the art to cover `width` x `height` cells
fn tile(art: &[String], width: usize, height: usize) -> Vec<String> {
    let pattern_width = art
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    if pattern_width == 0 {
        return Vec::new();
    }

    art.iter()
        .cycle()
        .take(height)
        .map(|line| {
            let padded: Vec<char> = line
                .chars()
                .chain(std::iter::repeat(' '))
                .take(pattern_width)
                .collect();
            padded.iter().cycle().take(width).collect()
        })
        .collect()
}

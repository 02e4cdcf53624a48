//! Reusable UI widget helpers

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// Linear blend between two RGB colors; `t` is clamped to 0.0..=1.0
pub fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Recolor the outline of `area` cell by cell.
///
/// `shade` receives each border cell's position and returns the color to
/// apply, or `None` to leave the cell alone.
pub fn shade_border(buf: &mut Buffer, area: Rect, shade: impl Fn(u16, u16) -> Option<Color>) {
    if area.is_empty() {
        return;
    }
    let (left, right) = (area.left(), area.right() - 1);
    let (top, bottom) = (area.top(), area.bottom() - 1);

    let mut apply = |x: u16, y: u16| {
        if let Some(color) = shade(x, y) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_fg(color);
            }
        }
    };

    for x in left..=right {
        apply(x, top);
        apply(x, bottom);
    }
    for y in top + 1..bottom {
        apply(left, y);
        apply(right, y);
    }
}

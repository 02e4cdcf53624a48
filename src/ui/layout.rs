//! Layout components (card placement, card regions, status bar)
//!
//! Region functions are pure so mouse hit testing can reuse them.

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::SubmissionStatus;
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Card size including its border
pub const CARD_WIDTH: u16 = 52;
pub const CARD_HEIGHT: u16 = 21;

/// Height of an input box (border + content + border)
const FIELD_HEIGHT: u16 = 3;

/// Width of the centered buttons
const BUTTON_WIDTH: u16 = 24;

/// Where each piece of the form card is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRegions {
    pub subtitle: Rect,
    /// Input boxes, indexed by `Field::index`
    pub fields: [Rect; 3],
    /// Inline error lines under each input
    pub errors: [Rect; 3],
    pub button: Rect,
}

/// Where each piece of the success panel is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessRegions {
    pub body: Rect,
    pub button: Rect,
}

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    (chunks[0], chunks[1])
}

/// Center a `width` x `height` rect in `area`, shrinking it to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// The card sits in the middle of the content area
pub fn card_area(content: Rect) -> Rect {
    centered(content, CARD_WIDTH, CARD_HEIGHT)
}

fn card_inner(card: Rect) -> Rect {
    card.inner(Margin {
        horizontal: 2,
        vertical: 1,
    })
}

pub fn card_regions(card: Rect) -> CardRegions {
    let chunks = Layout::vertical([
        Constraint::Length(1),             // Subtitle
        Constraint::Length(1),             // Spacer
        Constraint::Length(FIELD_HEIGHT),  // Name
        Constraint::Length(1),             // Name error
        Constraint::Length(FIELD_HEIGHT),  // Phone
        Constraint::Length(1),             // Phone error
        Constraint::Length(FIELD_HEIGHT),  // Email
        Constraint::Length(1),             // Email error
        Constraint::Length(1),             // Spacer
        Constraint::Length(BUTTON_HEIGHT), // Submit
        Constraint::Min(0),                // Remaining space
    ])
    .split(card_inner(card));

    CardRegions {
        subtitle: chunks[0],
        fields: [chunks[2], chunks[4], chunks[6]],
        errors: [chunks[3], chunks[5], chunks[7]],
        button: centered(chunks[9], BUTTON_WIDTH, BUTTON_HEIGHT),
    }
}

pub fn success_regions(card: Rect) -> SuccessRegions {
    let chunks = Layout::vertical([
        Constraint::Min(0),                // Message and receipt
        Constraint::Length(BUTTON_HEIGHT), // Reset
        Constraint::Length(1),             // Bottom padding
    ])
    .split(card_inner(card));

    SuccessRegions {
        body: chunks[0],
        button: centered(chunks[1], BUTTON_WIDTH, BUTTON_HEIGHT),
    }
}

/// Key hints on the left, transient message on the right
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hint_style = Style::default().fg(Color::DarkGray);
    let hints = match app.state.status() {
        SubmissionStatus::Idle => {
            format!("Tab/↑↓ move · Enter or {SUBMIT_SHORTCUT} submit · Esc quit")
        }
        SubmissionStatus::Loading => "Submitting... · Esc quit".to_string(),
        SubmissionStatus::Success => {
            "Enter sign up another · c copy reference · Esc quit".to_string()
        }
    };

    let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(32)]).split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {hints}"), hint_style))),
        chunks[0],
    );

    if let Some(message) = &app.status_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{message} "),
                Style::default().fg(Color::Yellow),
            )))
            .right_aligned(),
            chunks[1],
        );
    }
}

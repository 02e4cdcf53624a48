//! UI module for rendering the TUI

mod backdrop;
mod components;
mod forms;
mod layout;
mod success;
mod widgets;

use crate::app::App;
use crate::state::SubmissionStatus;
use ratatui::Frame;

pub use layout::{card_area, card_regions, create_layout, success_regions};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = create_layout(frame.area());

    backdrop::draw(frame, content_area, &app.state.backdrop);

    // The success panel replaces the form card
    let card = card_area(content_area);
    match app.state.status() {
        SubmissionStatus::Idle | SubmissionStatus::Loading => {
            forms::draw_signup_form(frame, card, &app.state)
        }
        SubmissionStatus::Success => success::draw(frame, card, &app.state),
    }

    layout::draw_status_bar(frame, status_area, app);
}

//! Application state definitions

use super::backdrop_state::BackdropState;
use super::forms::SignupForm;
use super::spotlight::Spotlight;
use super::submission::{Receipt, Submission, SubmissionStatus, SubmitOutcome};

/// Everything the screen renders from
#[derive(Debug, Default)]
pub struct AppState {
    pub form: SignupForm,
    pub submission: Submission,
    pub spotlight: Spotlight,
    pub backdrop: BackdropState,
}

impl AppState {
    pub fn new(spotlight_radius: u16) -> Self {
        let mut spotlight = Spotlight::new(spotlight_radius);
        // The form card is the first thing on screen
        spotlight.attach();
        Self {
            form: SignupForm::new(),
            submission: Submission::default(),
            spotlight,
            backdrop: BackdropState::new(),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.submission.status
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.submission.submit(&mut self.form)
    }

    /// The form card leaves the screen once the success panel shows
    pub fn complete_submission(&mut self, receipt: Receipt) -> bool {
        let completed = self.submission.complete(receipt);
        if completed {
            self.spotlight.detach();
        }
        completed
    }

    /// Back to an empty form with the card (and its spotlight) mounted again
    pub fn reset(&mut self) -> bool {
        let reset = self.submission.reset(&mut self.form);
        if reset {
            self.spotlight.attach();
        }
        reset
    }

    /// Whether anything on screen is animating
    pub fn is_animating(&self) -> bool {
        self.submission.status.is_loading() || self.backdrop.is_animating()
    }
}

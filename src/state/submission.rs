//! Submission state machine (idle -> loading -> success -> idle)

use super::forms::{validate, SignupForm};
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Where the simulated submission currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
}

impl SubmissionStatus {
    /// Label of the submit control in this state
    pub fn button_label(self) -> &'static str {
        match self {
            SubmissionStatus::Loading => "Submitting...",
            _ => "Submit",
        }
    }

    pub fn is_loading(self) -> bool {
        self == SubmissionStatus::Loading
    }
}

/// Confirmation handed back when a submission completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Local>,
}

impl Receipt {
    /// Issue a fresh receipt stamped with the current time
    pub fn issue() -> Self {
        Self {
            reference: Uuid::new_v4(),
            submitted_at: Local::now(),
        }
    }

    /// First block of the reference, for compact display
    pub fn short_reference(&self) -> String {
        self.reference
            .to_string()
            .split('-')
            .next()
            .unwrap_or_default()
            .to_uppercase()
    }
}

/// Result of a submit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed, a submission is now pending
    Started,
    /// Validation failed, errors were stored on the form
    Rejected,
    /// Not idle; nothing happened
    Ignored,
}

/// Tracks the status of the single submission a form can have in flight
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub status: SubmissionStatus,
    pub receipt: Option<Receipt>,
    /// When the pending submission started (drives the spinner)
    pub started_at: Option<Instant>,
}

impl Submission {
    const SPINNER_FRAMES: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
    const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

    /// Validate the form and, if every field passes, move to loading.
    ///
    /// The error map on the form is replaced with the fresh result either way.
    pub fn submit(&mut self, form: &mut SignupForm) -> SubmitOutcome {
        if self.status != SubmissionStatus::Idle {
            return SubmitOutcome::Ignored;
        }

        form.errors = validate(&form.data);
        if !form.errors.is_empty() {
            tracing::debug!(
                failing = ?form.errors.keys().map(|f| f.key()).collect::<Vec<_>>(),
                "Submit rejected"
            );
            return SubmitOutcome::Rejected;
        }

        self.status = SubmissionStatus::Loading;
        self.started_at = Some(Instant::now());
        tracing::info!("Submission started");
        SubmitOutcome::Started
    }

    /// The pending delay elapsed. Returns false if nothing was pending.
    pub fn complete(&mut self, receipt: Receipt) -> bool {
        if self.status != SubmissionStatus::Loading {
            tracing::warn!("Ignoring completion while {:?}", self.status);
            return false;
        }
        tracing::info!(reference = %receipt.reference, "Submission complete");
        self.status = SubmissionStatus::Success;
        self.receipt = Some(receipt);
        self.started_at = None;
        true
    }

    /// Leave the success panel and start over with an empty form
    pub fn reset(&mut self, form: &mut SignupForm) -> bool {
        if self.status != SubmissionStatus::Success {
            return false;
        }
        form.reset();
        self.status = SubmissionStatus::Idle;
        self.receipt = None;
        tracing::debug!("Form reset");
        true
    }

    /// Spinner glyph for the current loading frame
    pub fn spinner(&self) -> &'static str {
        let frame = self
            .started_at
            .map(|start| {
                (start.elapsed().as_millis() / Self::SPINNER_INTERVAL.as_millis()) as usize
            })
            .unwrap_or(0);
        Self::SPINNER_FRAMES[frame % Self::SPINNER_FRAMES.len()]
    }
}

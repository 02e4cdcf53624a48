//! Backdrop fade-in state

use std::time::{Duration, Instant};

/// Load/fade phase for the decorative backdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropPhase {
    /// Still loading
    Pending,
    /// Loaded, opacity easing in
    FadingIn,
    /// Fully shown
    Visible,
    /// Load failed; stays hidden
    Unavailable,
}

/// Backdrop art and its fade animation
#[derive(Debug)]
pub struct BackdropState {
    /// Art lines, once loaded
    pub lines: Vec<String>,
    /// When the art finished loading
    pub loaded_at: Option<Instant>,
    /// Current animation phase
    pub phase: BackdropPhase,
    /// Current opacity (0.0 hidden, 1.0 fully shown)
    pub opacity: f32,
}

impl BackdropState {
    /// Duration of the fade-in
    const FADE_DURATION: Duration = Duration::from_millis(600);

    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            loaded_at: None,
            phase: BackdropPhase::Pending,
            opacity: 0.0,
        }
    }

    /// Art arrived; start fading in
    pub fn loaded(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.loaded_at = Some(Instant::now());
        self.phase = BackdropPhase::FadingIn;
        self.opacity = 0.0;
    }

    /// Art could not be loaded; keep the backdrop hidden
    pub fn failed(&mut self) {
        self.phase = BackdropPhase::Unavailable;
        self.opacity = 0.0;
    }

    /// Update opacity based on elapsed time since load
    pub fn update(&mut self) {
        if self.phase != BackdropPhase::FadingIn {
            return;
        }
        let Some(loaded_at) = self.loaded_at else {
            return;
        };
        let elapsed = loaded_at.elapsed();
        if elapsed < Self::FADE_DURATION {
            let progress = elapsed.as_secs_f32() / Self::FADE_DURATION.as_secs_f32();
            // Cubic ease-out for a soft landing
            self.opacity = simple_easing::cubic_out(progress);
        } else {
            self.phase = BackdropPhase::Visible;
            self.opacity = 1.0;
        }
    }

    /// Whether the loop should redraw at animation rate
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, BackdropPhase::FadingIn)
    }

    pub fn is_shown(&self) -> bool {
        matches!(self.phase, BackdropPhase::FadingIn | BackdropPhase::Visible)
    }
}

impl Default for BackdropState {
    fn default() -> Self {
        Self::new()
    }
}

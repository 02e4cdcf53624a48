//! Application state and core logic

use crate::backdrop;
use crate::config::TuiConfig;
use crate::platform;
use crate::state::{AppState, Field, Receipt, SubmissionStatus, SubmitOutcome};
use crate::submit::{SimulatedSubmitter, Submitter};
use crate::ui;
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Transient message for the status bar
    pub status_message: Option<String>,
    /// Terminal size for hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Backend the pending submission runs against
    submitter: Arc<dyn Submitter>,
    completion_tx: mpsc::UnboundedSender<Receipt>,
    completion_rx: mpsc::UnboundedReceiver<Receipt>,
    /// Pending backdrop load, dropped once it reports
    backdrop_rx: Option<oneshot::Receiver<Result<Vec<String>>>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App and start loading the backdrop.
    /// Must be called inside the tokio runtime.
    pub fn new(config: &TuiConfig) -> Self {
        let submitter = Arc::new(SimulatedSubmitter::new(config.submit_delay()));
        let mut app = Self::with_submitter(config, submitter);
        app.backdrop_rx = Some(backdrop::spawn_load(config.backdrop_path.clone()));
        app
    }

    /// Create an App with a specific submission backend and no backdrop
    pub fn with_submitter(config: &TuiConfig, submitter: Arc<dyn Submitter>) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config.spotlight_radius()),
            status_message: None,
            terminal_size: None,
            submitter,
            completion_tx,
            completion_rx,
            backdrop_rx: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Drain background results and advance animations. Called once per frame.
    pub fn tick(&mut self) {
        self.poll_submission();
        self.poll_backdrop();
        self.state.backdrop.update();
    }

    /// Whether the loop should poll at animation rate
    pub fn is_animating(&self) -> bool {
        self.state.is_animating() || self.backdrop_rx.is_some()
    }

    /// Apply completions from the pending submission, if it has finished
    pub fn poll_submission(&mut self) {
        while let Ok(receipt) = self.completion_rx.try_recv() {
            self.state.complete_submission(receipt);
        }
    }

    fn poll_backdrop(&mut self) {
        use tokio::sync::oneshot::error::TryRecvError;

        let Some(rx) = self.backdrop_rx.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(lines)) => {
                tracing::debug!("Backdrop loaded ({} lines)", lines.len());
                self.state.backdrop.loaded(lines);
            }
            Ok(Err(err)) => {
                tracing::debug!("Backdrop unavailable: {err:#}");
                self.state.backdrop.failed();
            }
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => {
                tracing::debug!("Backdrop loader exited without a result");
                self.state.backdrop.failed();
            }
        }
        self.backdrop_rx = None;
    }

    /// Validate and, when the form is clean, start the simulated submission
    pub fn submit(&mut self) {
        match self.state.submit() {
            SubmitOutcome::Started => self.spawn_submission(),
            SubmitOutcome::Rejected => {
                let count = self.state.form.errors.len();
                self.status_message = Some(if count == 1 {
                    "1 field needs attention".to_string()
                } else {
                    format!("{count} fields need attention")
                });
            }
            SubmitOutcome::Ignored => {}
        }
    }

    /// Fire-and-forget: the task always reports back and is never cancelled
    fn spawn_submission(&self) {
        let submitter = Arc::clone(&self.submitter);
        let tx = self.completion_tx.clone();
        let form = self.state.form.data.clone();
        tokio::spawn(async move {
            let receipt = submitter.submit(form).await;
            if tx.send(receipt).is_err() {
                tracing::debug!("Submission finished after the app closed");
            }
        });
    }

    /// Dismiss the success panel
    pub fn reset(&mut self) {
        if self.state.reset() {
            self.status_message = None;
        }
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.status_message = None;

        match self.state.status() {
            SubmissionStatus::Success => self.handle_success_key(key),
            SubmissionStatus::Idle | SubmissionStatus::Loading => self.handle_form_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Char('s')
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | platform::SUBMIT_MODIFIER) =>
            {
                self.submit()
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.state.form.input_char(c)
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Enter | KeyCode::Char('r') => self.reset(),
            KeyCode::Char('c') | KeyCode::Char('y') => self.copy_reference(),
            _ => {}
        }
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.state.spotlight.track(mouse.column, mouse.row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.state.spotlight.track(mouse.column, mouse.row);
                self.handle_click(Position::new(mouse.column, mouse.row));
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, pos: Position) {
        let card = self.card_area();

        if self.state.status() == SubmissionStatus::Success {
            if ui::success_regions(card).button.contains(pos) {
                self.reset();
            }
            return;
        }

        let regions = ui::card_regions(card);
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| regions.fields[field.index()].contains(pos))
        {
            self.state.form.focus(field);
        } else if regions.button.contains(pos) {
            self.state.form.focus_submit();
            self.submit();
        }
    }

    /// Where the card sits for the current terminal size
    pub fn card_area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        let (content, _) = ui::create_layout(Rect::new(0, 0, width, height));
        ui::card_area(content)
    }

    fn copy_reference(&mut self) {
        let Some(receipt) = &self.state.submission.receipt else {
            return;
        };
        let reference = receipt.reference.to_string();
        self.status_message = Some(match copy_to_clipboard(&reference) {
            Ok(()) => "Copied reference".to_string(),
            Err(err) => {
                tracing::warn!("Clipboard unavailable: {err}");
                "Clipboard unavailable".to_string()
            }
        });
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormData;
    use crate::submit::MockSubmitter;
    use std::time::Duration;

    fn test_app(submitter: Arc<dyn Submitter>) -> App {
        let mut app = App::with_submitter(&TuiConfig::default(), submitter);
        app.terminal_size = Some((24, 80));
        app
    }

    fn simulated_app() -> App {
        test_app(Arc::new(SimulatedSubmitter::new(Duration::from_millis(2000))))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn fill(app: &mut App, name: &str, phone: &str, email: &str) {
        app.state.form.data = FormData::new(name, phone, email);
    }

    fn click(app: &mut App, pos: Position) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: pos.x,
            row: pos.y,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Let spawned tasks run without advancing the clock
    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    mod keyboard {
        use super::*;

        #[test]
        fn test_typing_fills_fields_in_order() {
            let mut app = simulated_app();
            type_text(&mut app, "Ana");
            app.handle_key(press(KeyCode::Tab));
            type_text(&mut app, "555-123-4567");
            app.handle_key(press(KeyCode::Tab));
            type_text(&mut app, "ana@x.com");
            app.handle_key(press(KeyCode::Backspace));

            assert_eq!(
                app.state.form.data,
                FormData::new("Ana", "555-123-4567", "ana@x.co")
            );
        }

        #[test]
        fn test_shifted_characters_are_typed() {
            let mut app = simulated_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
            assert_eq!(app.state.form.data.name, "A");
        }

        #[test]
        fn test_control_chords_are_not_typed() {
            let mut app = simulated_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
            assert!(app.state.form.data.is_empty());
        }

        #[test]
        fn test_enter_with_invalid_form_shows_errors() {
            let mut app = simulated_app();
            fill(&mut app, "", "123", "bad");
            app.handle_key(press(KeyCode::Enter));

            assert_eq!(app.state.status(), SubmissionStatus::Idle);
            assert_eq!(app.state.form.errors.len(), 3);
            assert_eq!(
                app.status_message.as_deref(),
                Some("3 fields need attention")
            );
        }

        #[tokio::test]
        async fn test_enter_in_a_field_submits() {
            let mut app = simulated_app();
            fill(&mut app, "Ana", "555-123-4567", "ana@x.com");
            app.state.form.focus(Field::Email);
            app.handle_key(press(KeyCode::Enter));

            assert_eq!(app.state.status(), SubmissionStatus::Loading);
            assert!(app.state.form.errors.is_empty());
        }

        #[test]
        fn test_typed_non_breaking_space_fails_phone() {
            let mut app = simulated_app();
            fill(&mut app, "Ana", "", "ana@x.com");
            app.state.form.focus(Field::Phone);
            type_text(&mut app, "555\u{a0}123\u{a0}4567");
            app.handle_key(press(KeyCode::Enter));

            assert_eq!(app.state.form.data.phone, "555\u{a0}123\u{a0}4567");
            assert_eq!(app.state.status(), SubmissionStatus::Idle);
            assert_eq!(
                app.state.form.error_for(Field::Phone).as_deref(),
                Some("Enter a valid phone number (min 10 digits)")
            );
        }

        #[test]
        fn test_ctrl_s_submits() {
            let mut app = simulated_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
            assert_eq!(app.state.form.errors.len(), 3);
            assert!(app.state.form.data.is_empty());
        }

        #[test]
        fn test_esc_quits() {
            let mut app = simulated_app();
            assert!(!app.should_quit());
            app.handle_key(press(KeyCode::Esc));
            assert!(app.should_quit());
        }

        #[test]
        fn test_release_events_are_ignored() {
            let mut app = simulated_app();
            let mut key = press(KeyCode::Char('a'));
            key.kind = KeyEventKind::Release;
            app.handle_key(key);
            assert!(app.state.form.data.is_empty());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_valid_submit_reaches_success_after_delay() {
            let mut app = simulated_app();
            fill(&mut app, "Ana", "555-123-4567", "ana@x.com");

            app.submit();
            assert_eq!(app.state.status(), SubmissionStatus::Loading);
            assert!(app.state.form.errors.is_empty());

            tokio::time::sleep(Duration::from_millis(1999)).await;
            settle().await;
            app.tick();
            assert_eq!(app.state.status(), SubmissionStatus::Loading);

            tokio::time::sleep(Duration::from_millis(2)).await;
            settle().await;
            app.tick();
            assert_eq!(app.state.status(), SubmissionStatus::Success);
            assert!(app.state.submission.receipt.is_some());
        }

        #[tokio::test]
        async fn test_only_one_submission_in_flight() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Receipt::issue());
            let mut app = test_app(Arc::new(mock));
            fill(&mut app, "Ana", "555-123-4567", "ana@x.com");

            app.submit();
            app.submit();
            app.handle_key(press(KeyCode::Enter));
            assert_eq!(app.state.status(), SubmissionStatus::Loading);

            settle().await;
            app.poll_submission();
            assert_eq!(app.state.status(), SubmissionStatus::Success);
        }

        #[tokio::test]
        async fn test_submitted_snapshot_is_sent() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit()
                .withf(|form: &FormData| form == &FormData::new("Jo", "----------", "a@b.c"))
                .times(1)
                .returning(|_| Receipt::issue());
            let mut app = test_app(Arc::new(mock));
            fill(&mut app, "Jo", "----------", "a@b.c");

            app.submit();
            settle().await;
            app.poll_submission();
            assert_eq!(app.state.status(), SubmissionStatus::Success);
        }

        #[test]
        fn test_invalid_submit_never_reaches_backend() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit().times(0);
            let mut app = test_app(Arc::new(mock));
            fill(&mut app, "", "123", "bad");

            app.submit();
            assert_eq!(app.state.status(), SubmissionStatus::Idle);
        }

        #[tokio::test]
        async fn test_reset_from_success_restores_empty_form() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit().returning(|_| Receipt::issue());
            let mut app = test_app(Arc::new(mock));
            fill(&mut app, "Ana", "555-123-4567", "ana@x.com");
            app.submit();
            settle().await;
            app.poll_submission();

            app.handle_key(press(KeyCode::Enter));

            assert_eq!(app.state.status(), SubmissionStatus::Idle);
            assert_eq!(app.state.form.data, FormData::new("", "", ""));
            assert!(app.state.form.errors.is_empty());
            assert!(app.state.submission.receipt.is_none());
        }

        #[tokio::test]
        async fn test_typing_on_success_panel_does_not_edit() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit().returning(|_| Receipt::issue());
            let mut app = test_app(Arc::new(mock));
            fill(&mut app, "Ana", "555-123-4567", "ana@x.com");
            app.submit();
            settle().await;
            app.poll_submission();

            app.handle_key(press(KeyCode::Char('z')));
            assert_eq!(app.state.form.data.name, "Ana");
            assert_eq!(app.state.status(), SubmissionStatus::Success);
        }
    }

    mod mouse {
        use super::*;

        #[test]
        fn test_click_focuses_field() {
            let mut app = simulated_app();
            let regions = ui::card_regions(app.card_area());
            let email = regions.fields[Field::Email.index()];

            click(&mut app, Position::new(email.x + 2, email.y + 1));
            assert_eq!(app.state.form.active_field(), Some(Field::Email));
        }

        #[test]
        fn test_click_submit_button_validates() {
            let mut app = simulated_app();
            let button = ui::card_regions(app.card_area()).button;

            click(&mut app, Position::new(button.x + 1, button.y + 1));
            assert!(app.state.form.is_buttons_row_active());
            assert_eq!(app.state.form.errors.len(), 3);
        }

        #[test]
        fn test_click_outside_card_changes_nothing() {
            let mut app = simulated_app();
            click(&mut app, Position::new(0, 0));
            assert_eq!(app.state.form.active_field(), Some(Field::Name));
            assert!(app.state.form.errors.is_empty());
        }

        #[test]
        fn test_movement_feeds_spotlight() {
            let mut app = simulated_app();
            app.handle_mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column: 30,
                row: 10,
                modifiers: KeyModifiers::NONE,
            });
            assert_eq!(app.state.spotlight.pointer(), Some(Position::new(30, 10)));
        }
    }

    mod backdrop_loading {
        use super::*;
        use crate::state::BackdropPhase;

        #[tokio::test]
        async fn test_backdrop_result_is_applied_once() {
            let mut app = simulated_app();
            let (tx, rx) = oneshot::channel();
            app.backdrop_rx = Some(rx);
            assert!(app.is_animating());

            app.tick();
            assert_eq!(app.state.backdrop.phase, BackdropPhase::Pending);

            tx.send(Ok(vec!["*".to_string()])).unwrap();
            app.tick();
            assert_eq!(app.state.backdrop.phase, BackdropPhase::FadingIn);
            assert!(app.backdrop_rx.is_none());
        }

        #[test]
        fn test_backdrop_failure_hides_backdrop() {
            let mut app = simulated_app();
            let (tx, rx) = oneshot::channel();
            app.backdrop_rx = Some(rx);
            tx.send(Err(anyhow::anyhow!("missing"))).unwrap();

            app.tick();
            assert_eq!(app.state.backdrop.phase, BackdropPhase::Unavailable);
            assert_eq!(app.state.status(), SubmissionStatus::Idle);
        }

        #[test]
        fn test_dropped_loader_hides_backdrop() {
            let mut app = simulated_app();
            let (tx, rx) = oneshot::channel::<Result<Vec<String>>>();
            app.backdrop_rx = Some(rx);
            drop(tx);

            app.tick();
            assert_eq!(app.state.backdrop.phase, BackdropPhase::Unavailable);
        }
    }
}

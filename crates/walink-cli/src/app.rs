//! Interactive form state.
//!
//! `App` owns everything the screen shows: the form store, which field has
//! focus, the copied flag, the preview clock and a transient status line.
//! It never touches the terminal; the TUI renderer feeds it key events and
//! ticks, then draws whatever the presenter builds from it.

use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use walink_engine::LinkForm;
use walink_runtime::{ClipboardWriter, Config, CopyOutcome, CopyTracker, PreviewClock, ResetTimer};
use walink_types::Field;

use crate::presentation::view_models::StatusLevel;

pub const LINK_GENERATED: &str = "Link gerado!";
pub const FIX_FIELDS: &str = "Corrija os campos destacados";
pub const LINK_COPIED: &str = "Link copiado!";
pub const NOTHING_TO_COPY: &str = "Gere um link antes de copiar";

const STATUS_TTL: Duration = Duration::from_secs(4);
const FIELDS: [Field; 2] = [Field::Phone, Field::Message];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub level: StatusLevel,
}

pub struct App<C: ClipboardWriter> {
    form: LinkForm,
    focus: Field,
    copy: CopyTracker,
    clock: PreviewClock,
    clipboard: C,
    status: Option<Status>,
    status_timer: ResetTimer,
    preview_min_width: u16,
    should_quit: bool,
}

impl<C: ClipboardWriter> App<C> {
    pub fn new(config: &Config, clipboard: C, now: Instant, wall: DateTime<Utc>) -> Result<Self> {
        config.validate()?;
        let clock = PreviewClock::new(
            config.preview.offset()?,
            config.preview.clock_refresh(),
            now,
            wall,
        );

        Ok(Self {
            form: LinkForm::new(),
            focus: Field::Phone,
            copy: CopyTracker::new(config.clipboard.reset_after()),
            clock,
            clipboard,
            status: None,
            status_timer: ResetTimer::new(),
            preview_min_width: config.preview.min_width,
            should_quit: false,
        })
    }

    pub fn with_input(mut self, phone: &str, message: &str) -> Self {
        self.form = LinkForm::with_input(phone, message);
        self
    }

    pub fn form(&self) -> &LinkForm {
        &self.form
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn is_copied(&self) -> bool {
        self.copy.is_copied()
    }

    pub fn clock_label(&self) -> &str {
        self.clock.label()
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn preview_min_width(&self) -> u16 {
        self.preview_min_width
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.quit(),
            KeyCode::Char('y') if ctrl => self.copy_link(now),
            KeyCode::Char('u') if ctrl => self.form.clear(self.focus),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.form.push_char(self.focus, c);
            }
            KeyCode::Backspace => self.form.pop_char(self.focus),
            KeyCode::Enter => self.submit(now),
            KeyCode::Tab | KeyCode::Down => self.focus = step(self.focus, 1),
            KeyCode::BackTab | KeyCode::Up => self.focus = step(self.focus, FIELDS.len() - 1),
            _ => {}
        }
    }

    pub fn submit(&mut self, now: Instant) {
        match self.form.submit() {
            Ok(link) => {
                tracing::info!(link = %link, "link generated");
                self.set_status(LINK_GENERATED, StatusLevel::Success, now);
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "submit rejected");
                if let Some(first) = errors.iter().next() {
                    self.focus = first.field();
                }
                self.set_status(FIX_FIELDS, StatusLevel::Error, now);
            }
        }
    }

    pub fn copy_link(&mut self, now: Instant) {
        let Some(link) = self.form.link() else {
            self.set_status(NOTHING_TO_COPY, StatusLevel::Warning, now);
            return;
        };

        match self.copy.copy(&mut self.clipboard, link.as_str(), now) {
            Ok(CopyOutcome::Copied) => self.set_status(LINK_COPIED, StatusLevel::Success, now),
            Ok(CopyOutcome::Skipped) => {
                self.set_status(NOTHING_TO_COPY, StatusLevel::Warning, now)
            }
            Err(err) => self.set_status(
                format!("Não foi possível copiar: {}", err),
                StatusLevel::Error,
                now,
            ),
        }
    }

    /// Advance timers. Returns true when something visible changed.
    pub fn on_tick(&mut self, now: Instant, wall: DateTime<Utc>) -> bool {
        let mut changed = self.copy.poll(now);
        changed |= self.clock.poll(now, wall);

        if self.status_timer.fire(now) {
            self.status = None;
            changed = true;
        }

        changed
    }

    /// Time until the nearest pending deadline.
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        [self.copy.remaining(now), self.status_timer.remaining(now)]
            .into_iter()
            .flatten()
            .fold(self.clock.remaining(now), Duration::min)
    }

    fn set_status(&mut self, message: impl Into<String>, level: StatusLevel, now: Instant) {
        self.status = Some(Status {
            message: message.into(),
            level,
        });
        self.status_timer.arm(now, STATUS_TTL);
    }
}

fn step(field: Field, by: usize) -> Field {
    let index = FIELDS.iter().position(|f| *f == field).unwrap_or(0);
    FIELDS[(index + by) % FIELDS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use walink_testing::{FailingClipboard, RecordingClipboard};

    fn wall() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 15, 30, 0).unwrap()
    }

    fn app_with(clipboard: RecordingClipboard, now: Instant) -> App<RecordingClipboard> {
        App::new(&Config::default(), clipboard, now, wall()).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text<C: ClipboardWriter>(app: &mut App<C>, text: &str, now: Instant) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)), now);
        }
    }

    #[test]
    fn test_clock_uses_configured_offset() {
        let app = app_with(RecordingClipboard::new(), Instant::now());
        assert_eq!(app.clock_label(), "12:30");
    }

    #[test]
    fn test_unschedulable_refresh_is_a_config_error() {
        let mut config = Config::default();
        config.preview.clock_refresh_secs = u64::MAX;

        let err = App::new(&config, RecordingClipboard::new(), Instant::now(), wall())
            .err()
            .unwrap();
        assert!(err.to_string().contains("clock_refresh_secs"));
    }

    #[test]
    fn test_typing_masks_phone_field() {
        let now = Instant::now();
        let mut app = app_with(RecordingClipboard::new(), now);

        type_text(&mut app, "11987654321", now);

        assert_eq!(app.form().phone(), "(11) 98765-4321");
    }

    #[test]
    fn test_tab_moves_focus_and_edits_message() {
        let now = Instant::now();
        let mut app = app_with(RecordingClipboard::new(), now);

        app.handle_key(press(KeyCode::Tab), now);
        assert_eq!(app.focus(), Field::Message);

        type_text(&mut app, "Oi", now);
        app.handle_key(press(KeyCode::Backspace), now);
        assert_eq!(app.form().message(), "O");

        app.handle_key(press(KeyCode::BackTab), now);
        assert_eq!(app.focus(), Field::Phone);
    }

    #[test]
    fn test_enter_generates_link_and_status() {
        let now = Instant::now();
        let mut app = app_with(RecordingClipboard::new(), now).with_input("11987654321", "Olá");

        app.handle_key(press(KeyCode::Enter), now);

        assert_eq!(
            app.form().link().map(|l| l.as_str()),
            Some("https://wa.me/11987654321?text=Ol%C3%A1")
        );
        assert_eq!(app.status().map(|s| s.message.as_str()), Some(LINK_GENERATED));
    }

    #[test]
    fn test_failed_submit_keeps_previous_link_and_focuses_error() {
        let now = Instant::now();
        let mut app = app_with(RecordingClipboard::new(), now).with_input("11987654321", "");
        app.submit(now);

        app.handle_key(ctrl('u'), now);
        type_text(&mut app, "119876543", now);
        app.handle_key(press(KeyCode::Tab), now);
        app.submit(now);

        assert_eq!(
            app.form().link().map(|l| l.as_str()),
            Some("https://wa.me/11987654321")
        );
        assert_eq!(app.focus(), Field::Phone);
        let status = app.status().unwrap();
        assert_eq!(status.message, FIX_FIELDS);
        assert_eq!(status.level, StatusLevel::Error);
    }

    #[test]
    fn test_copy_without_link_is_rejected() {
        let now = Instant::now();
        let clipboard = RecordingClipboard::new();
        let mut app = app_with(clipboard.clone(), now);

        app.handle_key(ctrl('y'), now);

        assert!(clipboard.writes().is_empty());
        assert!(!app.is_copied());
        assert_eq!(app.status().map(|s| s.message.as_str()), Some(NOTHING_TO_COPY));
    }

    #[test]
    fn test_copy_flag_resets_after_window() {
        let start = Instant::now();
        let clipboard = RecordingClipboard::new();
        let mut app = app_with(clipboard.clone(), start).with_input("1198765432", "");
        app.submit(start);

        app.handle_key(ctrl('y'), start);
        assert!(app.is_copied());
        assert_eq!(clipboard.last().as_deref(), Some("https://wa.me/1198765432"));

        app.on_tick(start + Duration::from_millis(1999), wall());
        assert!(app.is_copied());

        assert!(app.on_tick(start + Duration::from_millis(2000), wall()));
        assert!(!app.is_copied());
    }

    #[test]
    fn test_second_copy_extends_window() {
        let start = Instant::now();
        let mut app = app_with(RecordingClipboard::new(), start).with_input("1198765432", "");
        app.submit(start);

        app.copy_link(start);
        app.copy_link(start + Duration::from_millis(1500));

        app.on_tick(start + Duration::from_millis(2500), wall());
        assert!(app.is_copied());

        app.on_tick(start + Duration::from_millis(3500), wall());
        assert!(!app.is_copied());
    }

    #[test]
    fn test_clipboard_failure_leaves_flag_down() {
        let now = Instant::now();
        let mut app = App::new(&Config::default(), FailingClipboard, now, wall())
            .unwrap()
            .with_input("11987654321", "");
        app.submit(now);

        app.copy_link(now);

        assert!(!app.is_copied());
        let status = app.status().unwrap();
        assert_eq!(status.level, StatusLevel::Error);
        assert!(status.message.starts_with("Não foi possível copiar"));
    }

    #[test]
    fn test_status_expires() {
        let now = Instant::now();
        let mut app = app_with(RecordingClipboard::new(), now);
        app.submit(now);
        assert!(app.status().is_some());

        app.on_tick(now + STATUS_TTL, wall());
        assert!(app.status().is_none());
    }

    #[test]
    fn test_next_wakeup_picks_nearest_deadline() {
        let now = Instant::now();
        let mut app = app_with(RecordingClipboard::new(), now).with_input("11987654321", "");
        assert_eq!(app.next_wakeup(now), Duration::from_secs(60));

        app.submit(now);
        app.copy_link(now);
        assert_eq!(app.next_wakeup(now), Duration::from_millis(2000));
    }

    #[test]
    fn test_quit_keys() {
        let now = Instant::now();
        for key in [press(KeyCode::Esc), ctrl('c'), ctrl('q')] {
            let mut app = app_with(RecordingClipboard::new(), now);
            app.handle_key(key, now);
            assert!(app.should_quit());
        }
    }

    #[test]
    fn test_plain_q_is_text() {
        let now = Instant::now();
        let mut app = app_with(RecordingClipboard::new(), now);
        app.handle_key(press(KeyCode::Down), now);
        app.handle_key(press(KeyCode::Char('q')), now);

        assert!(!app.should_quit());
        assert_eq!(app.form().message(), "q");
    }

    #[test]
    fn test_release_events_are_ignored() {
        let now = Instant::now();
        let mut app = app_with(RecordingClipboard::new(), now);
        let mut key = press(KeyCode::Char('1'));
        key.kind = KeyEventKind::Release;

        app.handle_key(key, now);

        assert_eq!(app.form().phone(), "");
    }
}

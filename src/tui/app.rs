//! Application state for the TUI.
//!
//! The app is a thin shell around the session machine: it holds the
//! machine itself, UI preferences, the settings panel cursor, and the
//! quote overlay window. All timer semantics live in the machine.

use std::time::{Duration, Instant};

use crate::alert;
use crate::config::ThemeSetting;
use crate::timer::{random_quote, Mode, SessionMachine, TimerConfig, TimerState};
use crate::tui::theme::Theme;

/// How long the motivational quote stays on screen.
const QUOTE_DISPLAY: Duration = Duration::from_secs(5);

/// Fields adjustable in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    /// Work phase length.
    WorkMinutes,
    /// Break phase length.
    BreakMinutes,
    /// Number of sessions.
    TotalSessions,
    /// Sound cue on/off.
    Sound,
    /// Dark/light theme.
    Theme,
}

impl SettingsField {
    /// Field below this one, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::WorkMinutes => Self::BreakMinutes,
            Self::BreakMinutes => Self::TotalSessions,
            Self::TotalSessions => Self::Sound,
            Self::Sound => Self::Theme,
            Self::Theme => Self::WorkMinutes,
        }
    }

    /// Field above this one, wrapping.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::WorkMinutes => Self::Theme,
            Self::BreakMinutes => Self::WorkMinutes,
            Self::TotalSessions => Self::BreakMinutes,
            Self::Sound => Self::TotalSessions,
            Self::Theme => Self::Sound,
        }
    }

    /// Label shown in the settings panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WorkMinutes => "Work duration (min)",
            Self::BreakMinutes => "Break duration (min)",
            Self::TotalSessions => "Sessions",
            Self::Sound => "Sound",
            Self::Theme => "Theme",
        }
    }
}

/// A quote currently on screen.
struct ActiveQuote {
    text: &'static str,
    shown_at: Instant,
}

/// Application state.
pub struct App {
    /// The session state machine.
    machine: SessionMachine,
    /// Current theme.
    pub theme_setting: ThemeSetting,
    /// Whether the sound cue is enabled.
    pub sound_enabled: bool,
    /// Whether the settings panel is open.
    pub show_settings: bool,
    /// Selected field in the settings panel.
    pub selected_field: SettingsField,
    /// Quote overlay, if one is on screen.
    quote: Option<ActiveQuote>,
    /// Alert sink, fired once per phase transition while sound is enabled.
    alert: Box<dyn FnMut(Mode)>,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(config: TimerConfig, sound_enabled: bool, theme_setting: ThemeSetting) -> Self {
        Self::with_alert(
            config,
            sound_enabled,
            theme_setting,
            Box::new(alert::phase_complete),
        )
    }

    /// Create an app that sends alerts to a custom sink (used by tests).
    #[must_use]
    pub fn with_alert(
        config: TimerConfig,
        sound_enabled: bool,
        theme_setting: ThemeSetting,
        alert: Box<dyn FnMut(Mode)>,
    ) -> Self {
        Self {
            machine: SessionMachine::new(config),
            theme_setting,
            sound_enabled,
            show_settings: false,
            selected_field: SettingsField::WorkMinutes,
            quote: None,
            alert,
        }
    }

    /// Advance the machine by one second and run any side effects.
    pub fn tick(&mut self) {
        if let Some(mode) = self.machine.tick() {
            self.on_phase_complete(mode);
        }
    }

    /// Handle a phase-complete signal from the machine.
    fn on_phase_complete(&mut self, mode: Mode) {
        // The sound toggle gates the whole cue, bell and notification alike.
        if self.sound_enabled {
            (self.alert)(mode);
        }

        // A finished work phase earns a quote for the break.
        if mode == Mode::Break {
            self.quote = Some(ActiveQuote {
                text: random_quote(),
                shown_at: Instant::now(),
            });
        }
    }

    /// Drop the quote overlay once its display window has passed.
    pub fn expire_quote(&mut self) {
        if let Some(quote) = &self.quote {
            if quote.shown_at.elapsed() >= QUOTE_DISPLAY {
                self.quote = None;
            }
        }
    }

    /// The quote currently on screen, if any.
    #[must_use]
    pub fn quote(&self) -> Option<&'static str> {
        self.quote.as_ref().map(|q| q.text)
    }

    /// Start or pause the timer.
    pub fn toggle_run(&mut self) {
        self.machine.toggle_run();
    }

    /// Reset the timer to the start of the first session.
    pub fn reset(&mut self) {
        self.machine.reset();
        self.quote = None;
    }

    /// Flip between dark and light theme.
    pub fn toggle_theme(&mut self) {
        self.theme_setting = self.theme_setting.toggled();
    }

    /// Flip the sound cue on or off.
    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    /// Open or close the settings panel.
    pub fn toggle_settings(&mut self) {
        self.show_settings = !self.show_settings;
    }

    /// Move the settings cursor down.
    pub fn select_next_field(&mut self) {
        self.selected_field = self.selected_field.next();
    }

    /// Move the settings cursor up.
    pub fn select_previous_field(&mut self) {
        self.selected_field = self.selected_field.previous();
    }

    /// Increase the selected settings field (or toggle it).
    pub fn increase_selected(&mut self) {
        self.adjust_selected(1);
    }

    /// Decrease the selected settings field (or toggle it).
    pub fn decrease_selected(&mut self) {
        self.adjust_selected(-1);
    }

    fn adjust_selected(&mut self, delta: i32) {
        let config = *self.machine.config();
        match self.selected_field {
            SettingsField::WorkMinutes => {
                self.machine
                    .set_work_minutes(shift(config.work_minutes(), delta));
            }
            SettingsField::BreakMinutes => {
                self.machine
                    .set_break_minutes(shift(config.break_minutes(), delta));
            }
            SettingsField::TotalSessions => {
                self.machine
                    .set_total_sessions(shift(config.total_sessions(), delta));
            }
            SettingsField::Sound => self.toggle_sound(),
            SettingsField::Theme => self.toggle_theme(),
        }
    }

    /// The machine's current state, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> TimerState {
        self.machine.snapshot()
    }

    /// Remaining time formatted as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        self.machine.format_remaining()
    }

    /// The machine's current configuration.
    #[must_use]
    pub const fn config(&self) -> &TimerConfig {
        self.machine.config()
    }

    /// Whether the machine is applying ticks.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.machine.is_running()
    }

    /// The active color palette.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        Theme::from_setting(self.theme_setting)
    }
}

/// Shift an unsigned value by ±1 without underflowing.
#[allow(clippy::cast_sign_loss)]
const fn shift(value: u32, delta: i32) -> u32 {
    if delta >= 0 {
        value.saturating_add(delta as u32)
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    /// App whose alerts are recorded instead of ringing the terminal.
    fn app_with_recorded_alerts(sound_enabled: bool) -> (App, Rc<RefCell<Vec<Mode>>>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&fired);
        let app = App::with_alert(
            TimerConfig::new(20, 5, 2),
            sound_enabled,
            ThemeSetting::Dark,
            Box::new(move |mode| sink.borrow_mut().push(mode)),
        );
        (app, fired)
    }

    fn test_app() -> App {
        App::new(
            TimerConfig::new(25, 5, 4),
            false, // keep tests quiet
            ThemeSetting::Dark,
        )
    }

    #[test]
    fn test_settings_field_cycle() {
        let mut field = SettingsField::WorkMinutes;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, SettingsField::WorkMinutes);

        assert_eq!(
            SettingsField::WorkMinutes.previous(),
            SettingsField::Theme
        );
    }

    #[test]
    fn test_adjust_clamps_at_bounds() {
        let mut app = test_app();
        app.selected_field = SettingsField::BreakMinutes;

        for _ in 0..100 {
            app.decrease_selected();
        }
        assert_eq!(app.config().break_minutes(), 5);

        for _ in 0..100 {
            app.increase_selected();
        }
        assert_eq!(app.config().break_minutes(), 30);
    }

    #[test]
    fn test_adjust_toggles_sound_and_theme() {
        let mut app = test_app();

        app.selected_field = SettingsField::Sound;
        app.increase_selected();
        assert!(app.sound_enabled);

        app.selected_field = SettingsField::Theme;
        app.decrease_selected();
        assert_eq!(app.theme_setting, ThemeSetting::Light);
    }

    #[test]
    fn test_reset_clears_quote() {
        let mut app = test_app();
        app.quote = Some(ActiveQuote {
            text: "keep going",
            shown_at: Instant::now(),
        });

        app.reset();

        assert!(app.quote().is_none());
    }

    #[test]
    fn test_quote_survives_within_window() {
        let mut app = test_app();
        app.quote = Some(ActiveQuote {
            text: "keep going",
            shown_at: Instant::now(),
        });

        app.expire_quote();

        assert_eq!(app.quote(), Some("keep going"));
    }

    #[test]
    fn test_quote_expires_after_window() {
        let mut app = test_app();
        let shown_at = Instant::now() - Duration::from_secs(6);
        app.quote = Some(ActiveQuote {
            text: "keep going",
            shown_at,
        });

        app.expire_quote();

        assert!(app.quote().is_none());
    }

    #[test]
    fn test_no_alert_while_sound_disabled() {
        let (mut app, fired) = app_with_recorded_alerts(false);
        app.toggle_run();

        for _ in 0..20 * 60 {
            app.tick();
        }

        assert_eq!(app.snapshot().mode, Mode::Break);
        assert!(fired.borrow().is_empty());
        // The quote overlay is independent of the sound cue.
        assert!(app.quote().is_some());
    }

    #[test]
    fn test_alert_fires_once_per_transition_while_sound_enabled() {
        let (mut app, fired) = app_with_recorded_alerts(true);
        app.toggle_run();

        for _ in 0..20 * 60 {
            app.tick();
        }

        assert_eq!(*fired.borrow(), vec![Mode::Break]);
    }

    #[test]
    fn test_toggle_run_reaches_machine() {
        let mut app = test_app();
        assert!(!app.is_running());

        app.toggle_run();
        assert!(app.is_running());
    }
}

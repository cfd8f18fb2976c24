//! The session state machine.
//!
//! Owns all timer semantics: work/break alternation, session counting,
//! and completion. The machine is driven by an external one-per-second
//! tick signal and by discrete user commands; it performs no I/O itself
//! and reports phase transitions back to the caller as return values.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::config::TimerConfig;

/// Current phase of the session cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// A work phase is in progress
    Work,
    /// A break phase is in progress
    Break,
    /// All sessions are done; terminal until reset
    Completed,
}

impl Mode {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work Time",
            Self::Break => "Break Time",
            Self::Completed => "Sessions Completed!",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Read-only snapshot of the machine state, used for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerState {
    /// Current phase
    pub mode: Mode,
    /// Seconds left in the current phase
    pub remaining_seconds: u32,
    /// Current session, 1-indexed
    pub current_session: u32,
    /// Whether ticks are being applied
    pub is_running: bool,
    /// Phase progress in [0, 100]
    pub progress_percent: f64,
}

/// The Pomodoro session state machine.
///
/// Exclusively owns its [`TimerConfig`] and mutable state. Ticks and
/// commands are applied synchronously in call order; `tick` returns the
/// new mode when a phase transition occurred on that tick, so the caller
/// can fire the sound/quote side effects exactly once per transition.
#[derive(Debug, Clone)]
pub struct SessionMachine {
    config: TimerConfig,
    mode: Mode,
    remaining_seconds: u32,
    current_session: u32,
    is_running: bool,
}

impl SessionMachine {
    /// Create a machine at the start of the first work phase, paused.
    #[must_use]
    pub const fn new(config: TimerConfig) -> Self {
        Self {
            mode: Mode::Work,
            remaining_seconds: config.work_seconds(),
            current_session: 1,
            is_running: false,
            config,
        }
    }

    /// Advance the machine by one second.
    ///
    /// Returns the new mode if this tick completed a phase, otherwise
    /// `None`. The zero crossing is atomic: the tick that takes the
    /// remaining time from 1 to 0 also performs the phase transition, so
    /// a phase is never observable at zero seconds without its successor
    /// already in place.
    pub fn tick(&mut self) -> Option<Mode> {
        if !self.is_running || self.mode == Mode::Completed {
            return None;
        }

        if self.remaining_seconds > 1 {
            self.remaining_seconds -= 1;
            return None;
        }

        self.remaining_seconds = 0;
        Some(self.advance_phase())
    }

    /// Move to the next phase and return the new mode.
    fn advance_phase(&mut self) -> Mode {
        match self.mode {
            Mode::Work if self.current_session < self.config.total_sessions() => {
                self.mode = Mode::Break;
                self.remaining_seconds = self.config.break_seconds();
            }
            Mode::Work => {
                // Final work phase: no trailing break.
                self.mode = Mode::Completed;
                self.is_running = false;
            }
            Mode::Break => {
                self.mode = Mode::Work;
                // Capped so shrinking the session count mid-run cannot
                // push the counter past the total.
                self.current_session =
                    (self.current_session + 1).min(self.config.total_sessions());
                self.remaining_seconds = self.config.work_seconds();
            }
            // Guarded out by tick().
            Mode::Completed => {}
        }
        self.mode
    }

    /// Flip between running and paused. Ignored once completed.
    pub fn toggle_run(&mut self) {
        if self.mode != Mode::Completed {
            self.is_running = !self.is_running;
        }
    }

    /// Reinitialize from the current configuration, exactly as at creation.
    pub fn reset(&mut self) {
        self.mode = Mode::Work;
        self.remaining_seconds = self.config.work_seconds();
        self.current_session = 1;
        self.is_running = false;
    }

    /// Set the work phase length, clamped to [20, 60] minutes.
    ///
    /// Does not rescale the phase in progress; the new duration applies
    /// from the next work phase or reset.
    pub fn set_work_minutes(&mut self, minutes: u32) {
        self.config.set_work_minutes(minutes);
    }

    /// Set the break phase length, clamped to [5, 30] minutes.
    pub fn set_break_minutes(&mut self, minutes: u32) {
        self.config.set_break_minutes(minutes);
    }

    /// Set the session count, with a minimum of 1.
    pub fn set_total_sessions(&mut self, sessions: u32) {
        self.config.set_total_sessions(sessions);
    }

    /// Get the current configuration.
    #[must_use]
    pub const fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Get the current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Check if the machine is applying ticks.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    /// Get remaining time in the current phase.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        Duration::seconds(self.remaining_seconds as i64)
    }

    /// Phase progress as a percentage in [0, 100].
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let total = match self.mode {
            Mode::Work => self.config.work_seconds(),
            Mode::Break => self.config.break_seconds(),
            Mode::Completed => return 0.0,
        };
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.remaining_seconds);
        (f64::from(elapsed) / f64::from(total) * 100.0).clamp(0.0, 100.0)
    }

    /// Take a snapshot of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> TimerState {
        TimerState {
            mode: self.mode,
            remaining_seconds: self.remaining_seconds,
            current_session: self.current_session,
            is_running: self.is_running,
            progress_percent: self.progress_percent(),
        }
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_duration_mmss(self.remaining())
    }
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

//! User-adjustable timer configuration.
//!
//! All values are clamped to their documented ranges rather than rejected,
//! so no invalid configuration is representable.

use serde::{Deserialize, Serialize};

/// Minimum work phase length in minutes.
pub const MIN_WORK_MINUTES: u32 = 20;
/// Maximum work phase length in minutes.
pub const MAX_WORK_MINUTES: u32 = 60;
/// Minimum break phase length in minutes.
pub const MIN_BREAK_MINUTES: u32 = 5;
/// Maximum break phase length in minutes.
pub const MAX_BREAK_MINUTES: u32 = 30;
/// Minimum number of work sessions.
pub const MIN_SESSIONS: u32 = 1;

/// Timer durations and session count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Work phase length in minutes, within [20, 60]
    work_minutes: u32,
    /// Break phase length in minutes, within [5, 30]
    break_minutes: u32,
    /// Number of work sessions, at least 1
    total_sessions: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            break_minutes: 5,
            total_sessions: 4,
        }
    }
}

impl TimerConfig {
    /// Create a configuration, clamping each value to its valid range.
    #[must_use]
    pub fn new(work_minutes: u32, break_minutes: u32, total_sessions: u32) -> Self {
        let mut config = Self::default();
        config.set_work_minutes(work_minutes);
        config.set_break_minutes(break_minutes);
        config.set_total_sessions(total_sessions);
        config
    }

    /// Set the work phase length, clamped to [20, 60] minutes.
    pub fn set_work_minutes(&mut self, minutes: u32) {
        self.work_minutes = minutes.clamp(MIN_WORK_MINUTES, MAX_WORK_MINUTES);
    }

    /// Set the break phase length, clamped to [5, 30] minutes.
    pub fn set_break_minutes(&mut self, minutes: u32) {
        self.break_minutes = minutes.clamp(MIN_BREAK_MINUTES, MAX_BREAK_MINUTES);
    }

    /// Set the session count, with a minimum of 1.
    pub fn set_total_sessions(&mut self, sessions: u32) {
        self.total_sessions = sessions.max(MIN_SESSIONS);
    }

    /// Work phase length in minutes.
    #[must_use]
    pub const fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    /// Break phase length in minutes.
    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Number of work sessions.
    #[must_use]
    pub const fn total_sessions(&self) -> u32 {
        self.total_sessions
    }

    /// Work phase length in seconds.
    #[must_use]
    pub const fn work_seconds(&self) -> u32 {
        self.work_minutes * 60
    }

    /// Break phase length in seconds.
    #[must_use]
    pub const fn break_seconds(&self) -> u32 {
        self.break_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TimerConfig::default();
        assert_eq!(config.work_minutes(), 25);
        assert_eq!(config.break_minutes(), 5);
        assert_eq!(config.total_sessions(), 4);
    }

    #[test]
    fn test_work_minutes_clamped() {
        let mut config = TimerConfig::default();

        config.set_work_minutes(10);
        assert_eq!(config.work_minutes(), 20);

        config.set_work_minutes(90);
        assert_eq!(config.work_minutes(), 60);

        config.set_work_minutes(45);
        assert_eq!(config.work_minutes(), 45);
    }

    #[test]
    fn test_break_minutes_clamped() {
        let mut config = TimerConfig::default();

        config.set_break_minutes(0);
        assert_eq!(config.break_minutes(), 5);

        config.set_break_minutes(120);
        assert_eq!(config.break_minutes(), 30);

        config.set_break_minutes(15);
        assert_eq!(config.break_minutes(), 15);
    }

    #[test]
    fn test_total_sessions_minimum() {
        let mut config = TimerConfig::default();

        config.set_total_sessions(0);
        assert_eq!(config.total_sessions(), 1);

        config.set_total_sessions(8);
        assert_eq!(config.total_sessions(), 8);
    }

    #[test]
    fn test_new_clamps() {
        let config = TimerConfig::new(5, 60, 0);
        assert_eq!(config.work_minutes(), 20);
        assert_eq!(config.break_minutes(), 30);
        assert_eq!(config.total_sessions(), 1);
    }

    #[test]
    fn test_seconds_conversion() {
        let config = TimerConfig::new(25, 5, 4);
        assert_eq!(config.work_seconds(), 1500);
        assert_eq!(config.break_seconds(), 300);
    }
}

//! Pomodoro timer core.
//!
//! The session state machine plus its configuration and quote pool:
//! - Work/break alternation with session counting
//! - Tick-driven countdown with atomic phase transitions
//! - Clamped, user-adjustable durations

pub mod config;
pub mod machine;
pub mod quotes;

pub use config::TimerConfig;
pub use machine::{format_duration_mmss, Mode, SessionMachine, TimerState};
pub use quotes::random_quote;

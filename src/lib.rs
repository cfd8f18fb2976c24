//! pomo - A terminal Pomodoro timer
//!
//! This crate provides a single-screen countdown timer that alternates
//! work and break phases through a configurable number of sessions,
//! rendered with ratatui.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod alert;
pub mod cli;
pub mod config;
pub mod error;
pub mod timer;
pub mod tui;

pub use cli::args::Cli;
pub use error::PomoError;
pub use timer::{Mode, SessionMachine, TimerConfig, TimerState};

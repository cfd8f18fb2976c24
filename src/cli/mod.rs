//! Command-line interface for pomo.

pub mod args;

pub use args::Cli;

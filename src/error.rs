//! Error types for pomo.

use thiserror::Error;

/// Errors that can occur while running pomo.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup, event polling, or rendering failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

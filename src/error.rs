//! Error types for retro-text.
//!
//! The typewriter engine itself never fails; errors only come from
//! configuration validation and from writing to a display surface.

use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RetroTextError>;

/// Main error type for retro-text.
#[derive(Debug, Error)]
pub enum RetroTextError {
    #[error("Tick interval must be greater than zero, got {0:?}")]
    InvalidTickInterval(Duration),

    #[error("Font size must be a positive finite number, got {0}")]
    InvalidFontSize(f32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

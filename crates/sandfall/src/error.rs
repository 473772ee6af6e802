//! Construction errors.

use thiserror::Error;

/// Raised only when a world is built from a defective configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("ticks per second must be positive, got {0}")]
    InvalidTickRate(u32),
}

//! Configuration errors.
//!
//! Only `InsufficientFaces` and its relatives abort session construction.
//! Turn-level problems live in `rules::RevealError` and are never fatal.

use thiserror::Error;

/// Errors raised while assembling a session configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not a playable card count (expected 8, 10 or 12)")]
    InvalidCardCount(usize),

    #[error("board must have at least one column")]
    InvalidColumns,

    #[error("configuration needs {required} distinct faces but only {available} are usable")]
    InsufficientFaces { required: usize, available: usize },

    #[error("no artwork found for face {0:?}")]
    MissingArtwork(String),

    #[error("no usable configuration for {0} (default configuration also failed)")]
    NoUsableConfiguration(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

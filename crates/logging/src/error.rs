//! crates/logging/src/error.rs
//! Error types for configuration resolution and progress rendering.

use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Failure to resolve the message-level threshold from the environment.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// The variable is set but does not hold an integer.
    #[error("{variable} must be an integer message level, got {value:?}")]
    InvalidLevel {
        /// Environment variable that was consulted.
        variable: String,
        /// Raw value as found in the environment.
        value: String,
        /// Integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The variable is set but its value is not UTF-8.
    #[error("{variable} is not valid UTF-8")]
    NotUnicode {
        /// Environment variable that was consulted.
        variable: String,
    },
}

/// Failure to render a progress bar.
#[derive(Debug, Error)]
pub enum ProgressError {
    /// `total` was zero, so no fraction can be computed.
    #[error("progress total must be greater than zero")]
    ZeroTotal,
    /// Writing or flushing stdout failed.
    #[error("failed to write progress bar: {0}")]
    Io(#[from] io::Error),
}

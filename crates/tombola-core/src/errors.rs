//! Unified error system for Tombola
//!
//! A single error type shared by every crate in the workspace. Entropy-source
//! degradation is never an error; only caller mistakes and configuration
//! problems surface here.

use serde::{Deserialize, Serialize};

/// Unified error type for all Tombola operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum TombolaError {
    /// Malformed input passed to a generator or session operation
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message describing the invalid input
        message: String,
    },

    /// Configuration could not be loaded, parsed or validated
    #[error("Configuration error: {message}")]
    Config {
        /// Error message describing the configuration problem
        message: String,
    },

    /// Filesystem access failed
    #[error("I/O error: {message}")]
    Io {
        /// Error message describing the I/O failure
        message: String,
    },
}

impl TombolaError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

/// Standard Result type for Tombola operations
pub type Result<T> = std::result::Result<T, TombolaError>;

impl From<std::io::Error> for TombolaError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

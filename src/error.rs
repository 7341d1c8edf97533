//! Error types for the fastspell library.
//!
//! Only vocabulary selection and the outer collaborators (file loading, config
//! parsing, CLI input) can fail. Every query operation is total and therefore
//! never returns a [`SpellError`].
//!
//! # Examples
//!
//! ```
//! use fastspell::error::{Result, SpellError};
//!
//! fn select() -> Result<()> {
//!     Err(SpellError::configuration("at most 3 word lists can be selected"))
//! }
//!
//! match select() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for fastspell operations.
#[derive(Error, Debug)]
pub enum SpellError {
    /// I/O errors (word list files, config files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid vocabulary selection or configuration values
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed user input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellError.
pub type Result<T> = std::result::Result<T, SpellError>;

impl SpellError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        SpellError::Configuration(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellError::InvalidArgument(msg.into())
    }

    /// Create a configuration error for a source name that does not exist.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        SpellError::Configuration(format!("Not found: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellError::Other(msg.into())
    }

    /// Whether this error came from selecting vocabulary sources or config values.
    pub fn is_configuration(&self) -> bool {
        matches!(self, SpellError::Configuration(_))
    }
}

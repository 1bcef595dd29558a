//! Error types for the Lexstat library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LexstatError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexstat::error::{LexstatError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexstatError::analysis("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexstat operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides constructor methods for the string-carrying variants.
#[derive(Error, Debug)]
pub enum LexstatError {
    /// I/O errors (file reads, standard streams)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, stop-word configuration)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexstatError.
pub type Result<T> = std::result::Result<T, LexstatError>;

impl LexstatError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexstatError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        LexstatError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexstatError::Other(msg.into())
    }
}

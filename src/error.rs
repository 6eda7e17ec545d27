//! Error types for the newsvote library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`NewsvoteError`] enum.
//!
//! # Examples
//!
//! ```
//! use newsvote::error::{NewsvoteError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NewsvoteError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for newsvote operations.
#[derive(Error, Debug)]
pub enum NewsvoteError {
    /// I/O errors (resource files, settings directory, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (patterns, resources, tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Settings store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A category outside the model's fixed category set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Operation not allowed in the current model state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Invalid argument supplied by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with NewsvoteError.
pub type Result<T> = std::result::Result<T, NewsvoteError>;

impl NewsvoteError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        NewsvoteError::Analysis(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        NewsvoteError::Storage(msg.into())
    }

    /// Create a new unknown category error.
    pub fn unknown_category<S: Into<String>>(category: S) -> Self {
        NewsvoteError::UnknownCategory(category.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        NewsvoteError::InvalidOperation(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        NewsvoteError::InvalidArgument(msg.into())
    }
}

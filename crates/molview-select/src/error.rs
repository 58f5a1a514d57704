//! Error types for the selection engine
//!
//! `ParseError` is the failure shape the external grammar front-end raises
//! through the `Parser` seam; `SelectError` covers everything the engine
//! itself surfaces.

use thiserror::Error;

/// Failure raised by the grammar front-end when it rejects an expression
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    /// Human-readable reason the input was rejected
    pub message: String,
}

impl ParseError {
    /// Create a parse error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

/// Errors surfaced by the selection engine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// Named selector was never registered in the context
    #[error("selector not found: {0}")]
    KeyNotFound(String),

    /// Grammar front-end rejected the input
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for selection operations
pub type SelectResult<T> = Result<T, SelectError>;

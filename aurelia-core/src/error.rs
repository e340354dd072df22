//! Structured error types shared across the Aurelia crates.

use thiserror::Error;

/// Unified error type for all Aurelia operations.
#[derive(Debug, Error)]
pub enum AureliaError {
    /// I/O error while reading a token stream or flushing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed token stream (truncated input, non-digit bytes, overflow).
    #[error("parse error: {0}")]
    Parse(String),

    /// An argument or query outside its documented bounds.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the Aurelia crates.
pub type Result<T> = std::result::Result<T, AureliaError>;

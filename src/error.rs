//! Error types for signal configuration and sample file operations.

use thiserror::Error;

/// Result type for signal operations.
pub type SignalResult<T> = Result<T, SignalError>;

/// Errors that can occur while configuring a signal or writing its samples.
#[derive(Debug, Error)]
pub enum SignalError {
    /// A value violated a hard precondition of a setter.
    #[error("Invalid argument: {what} (got {value})")]
    InvalidArgument { what: &'static str, value: f64 },

    /// A value violated an ordering constraint against another field.
    #[error("Out of range: {what} (got {value}, bound {bound})")]
    Range {
        what: &'static str,
        value: f64,
        bound: f64,
    },

    /// The sample file could not be created, written or read.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// A line of a sample file could not be parsed.
    #[error("Malformed sample at line {line}: {content:?}")]
    Parse { line: usize, content: String },
}

impl SignalError {
    pub(crate) fn invalid(what: &'static str, value: f64) -> Self {
        Self::InvalidArgument { what, value }
    }

    pub(crate) fn range(what: &'static str, value: f64, bound: f64) -> Self {
        Self::Range { what, value, bound }
    }
}

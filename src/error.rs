//! Error handling for the dynseq library
//!
//! Every fallible container, sequence and configuration operation reports a
//! [`DynSeqError`]. Errors are surfaced to the direct caller; nothing in the
//! container or the sort engine retries or recovers internally.

use thiserror::Error;

/// Main error type for the dynseq library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DynSeqError {
    /// Index outside the live range of a container
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The number of live elements
        size: usize,
    },

    /// Argument outside the accepted domain (slice ranges, destination sizes)
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument
        message: String,
    },

    /// Operation not valid for the current input, e.g. an unseeded fold over nothing
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of why the operation cannot proceed
        message: String,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl DynSeqError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid operation error
    pub fn invalid_operation<S: Into<String>>(message: S) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "bounds",
            Self::InvalidArgument { .. } => "argument",
            Self::InvalidOperation { .. } => "operation",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DynSeqError>;

/// Assert that an index addresses a live element
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(DynSeqError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that `len` elements starting at `start` fit inside `size`
#[inline]
pub fn check_range(start: usize, len: usize, size: usize) -> Result<()> {
    match start.checked_add(len) {
        Some(end) if end <= size => Ok(()),
        _ => Err(DynSeqError::invalid_argument(format!(
            "Invalid range: start {} with length {} exceeds size {}",
            start, len, size
        ))),
    }
}

//! Error types for the property counter
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Counter Error Enum ==
/// Unified error type for checkers and the counting engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CounterError {
    /// Malformed input rejected before any work is done
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A checker failed while testing a single element
    #[error("Evaluation failed: {0}")]
    Evaluation(String),
}

impl CounterError {
    /// Shorthand for building an `InvalidArgument` error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        CounterError::InvalidArgument(msg.into())
    }

    /// Shorthand for building an `Evaluation` error.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        CounterError::Evaluation(msg.into())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the property counter.
pub type Result<T> = std::result::Result<T, CounterError>;

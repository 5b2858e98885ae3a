//! Stage error types

use thiserror::Error;

/// Error types for letter composition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("Brief kon niet worden samengesteld: {0}")]
    InvalidBody(String),

    #[error("Brief kon niet worden samengesteld")]
    Rejected,
}

/// Error types for letter dispatch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("Brief kon niet worden verstuurd: {0}")]
    Dispatch(String),

    #[error("Brief kon niet worden verstuurd")]
    Unavailable,
}

use thiserror::Error;

/// Errors from world-state operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    /// The backing store rejected or failed the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result alias for world-state operations.
pub type StateResult<T> = Result<T, StateError>;

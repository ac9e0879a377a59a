use thiserror::Error;

/// Errors produced by contract operations.
///
/// `AlreadyExists` and `NotFound` messages are part of the external surface:
/// the gateway forwards them verbatim so operators can tell a duplicate
/// write from a missing record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("the event {0} already exists")]
    AlreadyExists(String),

    #[error("the event {0} does not exist")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("state error: {0}")]
    State(#[from] stl_state::StateError),
}

/// Result alias for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;

impl From<stl_types::TypeError> for ContractError {
    fn from(err: stl_types::TypeError) -> Self {
        ContractError::Serialization(err.to_string())
    }
}

use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown device type: {0}")]
    UnknownDeviceType(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

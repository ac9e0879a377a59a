use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimulatorResult<T> = Result<T, SimulatorError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("contract error: {0}")]
    Contract(#[from] stl_contract::ContractError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

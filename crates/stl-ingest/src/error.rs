use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The datagram payload is not a well-formed envelope. Handled at the
    /// listener edge (log and drop); never surfaced past it.
    #[error("malformed datagram: {0}")]
    Decode(String),

    /// The gateway could not be reached or replied with a failure status.
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type IngestResult<T> = Result<T, IngestError>;

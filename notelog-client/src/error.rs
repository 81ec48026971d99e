/// Error types for the Notelog client
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Base URL not configured")]
    Unconfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    UnexpectedResponse(String),
}

impl ClientError {
    /// Stable error code for classification by callers
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Unconfigured => "UNCONFIGURED",
            ClientError::Http(_) => "HTTP_ERROR",
            ClientError::NotFound(_) => "NOT_FOUND",
            ClientError::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            ClientError::UnexpectedResponse(_) => "UNEXPECTED_RESPONSE",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("invalid storage connection string: {0}")]
    InvalidConnectionString(String),

    #[error("invalid storage account key: {0}")]
    InvalidAccountKey(String),

    #[error("invalid blob url: {0}")]
    InvalidUrl(String),

    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),

    #[error("container {0} does not exist")]
    ContainerNotFound(String),

    #[error("blob storage request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("blob storage responded with {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

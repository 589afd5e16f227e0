use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("repository not found: {0}")]
    NotFound(String),
    #[error("access denied to {0} (private or gated repository)")]
    Unauthorized(String),
    #[error("metadata request for {repo} failed with status {status}")]
    Status {
        repo: String,
        status: reqwest::StatusCode,
    },
    #[error("metadata request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed metadata response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Backend returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Resource not found at {0}")]
    NotFound(String),

    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StabilityError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to Stability AI failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(
        "Stability AI responded with status {status}: {}",
        .message.as_deref().unwrap_or("no details")
    )]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("malformed Stability AI response: {0}")]
    Malformed(String),

    #[error("no image data in Stability AI response")]
    NoImageData,

    #[error("invalid base64 image data: {0}")]
    InvalidImageData(#[from] base64::DecodeError),
}

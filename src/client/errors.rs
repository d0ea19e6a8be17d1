use reqwest::StatusCode;
use thiserror::Error;

pub const EMPTY_PROMPT_MESSAGE: &str = crate::generate::dtos::generate_image_dto::EMPTY_PROMPT_MESSAGE;
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error: Could not connect to the API. Check that the image proxy is running and reachable.";
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";
pub const NO_IMAGE_DATA_MESSAGE: &str = "No image data received from API";
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to generate image. Please try again.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("could not connect: {0}")]
    Network(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP error! Status: {}", .status.as_u16())]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("{}", NO_IMAGE_DATA_MESSAGE)]
    NoImageData,

    #[error("{0}")]
    Other(String),
}

impl ClientError {
    pub fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return Self::Timeout;
        }

        if e.is_connect() {
            return Self::Network(e);
        }

        Self::Other(e.to_string())
    }

    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Timeout => TIMEOUT_MESSAGE.to_string(),
            Self::Status {
                message: Some(message),
                ..
            } => message.to_string(),
            Self::Status { status, .. } => format!("HTTP error! Status: {}", status.as_u16()),
            Self::NoImageData => NO_IMAGE_DATA_MESSAGE.to_string(),
            Self::Build(e) => e.to_string(),
            Self::Other(message) if message.is_empty() => GENERIC_ERROR_MESSAGE.to_string(),
            Self::Other(message) => message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_prefers_body_message() {
        let err = ClientError::Status {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: Some("rate limited".to_string()),
        };
        assert_eq!(err.user_message(), "rate limited");
    }

    #[test]
    fn test_status_without_message_falls_back_to_code() {
        let err = ClientError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(err.user_message(), "HTTP error! Status: 500");
        assert_eq!(err.to_string(), "HTTP error! Status: 500");
    }

    #[test]
    fn test_other_messages() {
        assert_eq!(ClientError::Other(String::new()).user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(ClientError::Other("boom".to_string()).user_message(), "boom");
        assert_eq!(ClientError::NoImageData.user_message(), NO_IMAGE_DATA_MESSAGE);
        assert_eq!(ClientError::Timeout.user_message(), TIMEOUT_MESSAGE);
    }
}

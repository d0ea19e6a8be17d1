use axum::{http::StatusCode, BoxError};

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    RequestTimeout,
    ImageApiUnreachable,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal server error occurred.".to_string(),
            },
            Self::RequestTimeout => ApiError {
                code: StatusCode::REQUEST_TIMEOUT,
                message: "Request timed out.".to_string(),
            },
            Self::ImageApiUnreachable => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Image API unreachable".to_string(),
            },
        }
    }
}

pub async fn handle_layer_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("request timed out");
        return DefaultApiError::RequestTimeout.value();
    }

    tracing::error!(%err, "unhandled layer error");
    DefaultApiError::InternalServerError.value()
}

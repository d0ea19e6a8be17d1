use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GenerateApiError {
    ImageGenerationFailed,
}

impl GenerateApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::ImageGenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Image generation failed".to_string(),
            },
        }
    }
}

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a prompt";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_dimensions"))]
pub struct GenerateImageDto {
    #[validate(
        custom(function = "validate_prompt"),
        length(max = 2000, message = "prompt must be at most 2000 characters.")
    )]
    #[serde(default)]
    pub prompt: String,
    #[validate(range(min = 128, max = 2048, message = "width must be between 128 and 2048."))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[validate(range(min = 128, max = 2048, message = "height must be between 128 and 2048."))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[validate(range(min = 10, max = 150, message = "steps must be between 10 and 150."))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[validate(range(min = 0.0, max = 35.0, message = "cfg_scale must be between 0 and 35."))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfg_scale: Option<f64>,
    #[validate(range(min = 1, max = 10, message = "samples must be between 1 and 10."))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<u32>,
}

impl GenerateImageDto {
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            width: None,
            height: None,
            steps: None,
            cfg_scale: None,
            samples: None,
        }
    }

    pub fn sanitized(&self) -> Self {
        return Self {
            prompt: self.prompt.trim().replace("\n", " ").replace("\r", ""),
            ..self.clone()
        };
    }
}

fn validate_prompt(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("validate_prompt");
        error.message = Some(Cow::from(EMPTY_PROMPT_MESSAGE));
        return Err(error);
    }

    return Ok(());
}

fn validate_dimensions(dto: &GenerateImageDto) -> Result<(), ValidationError> {
    let dimensions = [dto.width, dto.height];

    if dimensions.iter().flatten().any(|value| value % 64 != 0) {
        let mut error = ValidationError::new("validate_dimensions");
        error.message = Some(Cow::from("width and height must be multiples of 64."));
        return Err(error);
    }

    return Ok(());
}

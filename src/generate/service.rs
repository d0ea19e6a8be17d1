use crate::{
    app::models::api_error::ApiError,
    stability::{
        config::{
            DEFAULT_CFG_SCALE, DEFAULT_HEIGHT, DEFAULT_PROMPT_WEIGHT, DEFAULT_SAMPLES,
            DEFAULT_STEPS, DEFAULT_WIDTH,
        },
        errors::StabilityError,
        models::input_spec::{InputSpec, TextPrompt},
        service::StabilityClient,
    },
};

use super::{
    dtos::generate_image_dto::GenerateImageDto, errors::GenerateApiError,
    models::generated_image::GeneratedImage,
};

pub async fn generate_image(
    dto: &GenerateImageDto,
    stability: &StabilityClient,
) -> Result<GeneratedImage, ApiError> {
    match request_image(dto, stability).await {
        Ok(base64_image) => Ok(GeneratedImage::from_base64_png(&base64_image)),
        Err(e) => {
            // the remote cause stays in the log, callers get a fixed message
            tracing::error!(%e, engine = stability.engine(), "Stability AI error");
            Err(GenerateApiError::ImageGenerationFailed.value())
        }
    }
}

async fn request_image(
    dto: &GenerateImageDto,
    stability: &StabilityClient,
) -> Result<String, StabilityError> {
    let input_spec = provide_input_spec(dto);
    let response = stability.text_to_image(&input_spec).await?;

    if let Some(artifact) = response.artifacts.first() {
        tracing::debug!(
            seed = ?artifact.seed,
            finish_reason = ?artifact.finish_reason,
            "received artifact"
        );
    }

    let Some(base64_image) = response.first_image() else {
        return Err(StabilityError::NoImageData);
    };

    let bytes = base64::decode(base64_image)?;
    tracing::debug!(bytes = bytes.len(), "received image");

    Ok(base64_image.to_string())
}

fn provide_input_spec(dto: &GenerateImageDto) -> InputSpec {
    InputSpec {
        text_prompts: vec![TextPrompt {
            text: dto.prompt.to_string(),
            weight: Some(DEFAULT_PROMPT_WEIGHT),
        }],
        cfg_scale: dto.cfg_scale.unwrap_or(DEFAULT_CFG_SCALE),
        height: dto.height.unwrap_or(DEFAULT_HEIGHT),
        width: dto.width.unwrap_or(DEFAULT_WIDTH),
        steps: dto.steps.unwrap_or(DEFAULT_STEPS),
        samples: dto.samples.unwrap_or(DEFAULT_SAMPLES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_spec_defaults() {
        let spec = provide_input_spec(&GenerateImageDto::new("a red fox"));

        assert_eq!(spec.text_prompts.len(), 1);
        assert_eq!(spec.text_prompts[0].text, "a red fox");
        assert_eq!(spec.text_prompts[0].weight, Some(1.0));
        assert_eq!(spec.cfg_scale, 7.0);
        assert_eq!((spec.width, spec.height), (512, 512));
        assert_eq!(spec.steps, 30);
        assert_eq!(spec.samples, 1);
    }

    #[test]
    fn test_input_spec_overrides() {
        let mut dto = GenerateImageDto::new("a red fox");
        dto.width = Some(1024);
        dto.height = Some(1024);
        dto.steps = Some(40);
        dto.cfg_scale = Some(9.5);
        dto.samples = Some(2);

        let spec = provide_input_spec(&dto);
        assert_eq!((spec.width, spec.height), (1024, 1024));
        assert_eq!(spec.steps, 40);
        assert_eq!(spec.cfg_scale, 9.5);
        assert_eq!(spec.samples, 2);
    }
}

use serde::Serialize;

/// Body of a text-to-image request.
#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub text_prompts: Vec<TextPrompt>,
    pub cfg_scale: f64,
    pub height: u32,
    pub width: u32,
    pub steps: u32,
    pub samples: u32,
}

#[derive(Debug, Serialize)]
pub struct TextPrompt {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

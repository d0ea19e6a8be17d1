use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GeneratedImage {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl GeneratedImage {
    pub fn from_base64_png(base64: &str) -> Self {
        Self {
            image_url: format!("data:{};base64,{}", mime::IMAGE_PNG, base64),
        }
    }
}

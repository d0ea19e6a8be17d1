use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GenerateImageResponse {
    #[serde(rename(deserialize = "imageUrl"))]
    pub image_url: Option<String>,
}

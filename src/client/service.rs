use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{app::util, generate::dtos::generate_image_dto::GenerateImageDto};

use super::{
    enums::api_status::ApiStatus,
    errors::ClientError,
    structs::{error_response::ErrorResponse, generate_image_response::GenerateImageResponse},
};

/// The one capability a session needs: turn a prompt into a displayable
/// image reference, and report whether the image API is reachable.
#[async_trait]
pub trait ImageGenerationClient: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<String, ClientError>;
    async fn check_status(&self) -> ApiStatus;
}

/// [`ImageGenerationClient`] backed by the proxy service.
pub struct ProxyClient {
    client: Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = util::reqwest::build_client(timeout).map_err(ClientError::Build)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ImageGenerationClient for ProxyClient {
    async fn generate_image(&self, prompt: &str) -> Result<String, ClientError> {
        let url = format!("{}/generate", self.base_url);

        let res = self
            .client
            .post(url)
            .json(&GenerateImageDto::new(prompt))
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let status = res.status();
        tracing::debug!(%status, "generate response");

        let text = res.text().await.map_err(ClientError::from_transport)?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(error_response) => error_response.into_message(),
                Err(_) => None,
            };

            return Err(ClientError::Status { status, message });
        }

        let Ok(response) = serde_json::from_str::<GenerateImageResponse>(&text) else {
            return Err(ClientError::NoImageData);
        };

        match response.image_url {
            Some(image_url) if !image_url.is_empty() => Ok(image_url),
            _ => Err(ClientError::NoImageData),
        }
    }

    async fn check_status(&self) -> ApiStatus {
        let url = format!("{}/status", self.base_url);

        match self.client.get(url).send().await {
            Ok(res) if res.status().is_success() => ApiStatus::Connected,
            Ok(res) => {
                tracing::warn!(status = %res.status(), "API connection test failed");
                ApiStatus::Error
            }
            Err(e) => {
                tracing::warn!(%e, "API connection error");
                ApiStatus::Error
            }
        }
    }
}

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STABILITY_API_URL: &str = "https://api.stability.ai";
pub const DEFAULT_STABILITY_ENGINE: &str = "stable-diffusion-v1-5";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    #[serde(default)]
    pub stability_api_key: String,
    pub stability_api_url: Option<String>,
    pub stability_engine: Option<String>,

    pub request_timeout_secs: Option<u64>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn stability_api_url(&self) -> &str {
        let url = self
            .stability_api_url
            .as_deref()
            .unwrap_or(DEFAULT_STABILITY_API_URL);

        url.trim_end_matches('/')
    }

    pub fn stability_engine(&self) -> &str {
        self.stability_engine
            .as_deref()
            .unwrap_or(DEFAULT_STABILITY_ENGINE)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

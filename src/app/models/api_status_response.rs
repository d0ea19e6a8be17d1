use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiStatusResponse {
    pub status: String,
    pub credits: f64,
}

impl ApiStatusResponse {
    pub fn connected(credits: f64) -> Self {
        Self {
            status: "connected".to_string(),
            credits,
        }
    }
}

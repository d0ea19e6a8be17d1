use std::time::Duration;

use ::reqwest::{header, Client};

/// Shared outbound client. Every call carries `Accept: application/json`
/// and is bounded by `timeout`.
pub fn build_client(timeout: Duration) -> Result<Client, ::reqwest::Error> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );

    Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
}

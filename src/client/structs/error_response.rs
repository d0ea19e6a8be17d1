use serde::Deserialize;

/// Error body from the proxy (`error`) or a passthrough upstream (`message`).
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|message| !message.is_empty())
    }
}

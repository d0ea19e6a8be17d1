use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StabilityErrorResponse {
    pub name: Option<String>,
    pub message: Option<String>,
}

impl StabilityErrorResponse {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.name)
    }
}

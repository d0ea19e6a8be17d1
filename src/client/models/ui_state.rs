use crate::client::enums::{api_status::ApiStatus, phase::Phase};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub prompt: String,
    pub phase: Phase,
    pub api_status: ApiStatus,
}

impl UiState {
    pub fn loading(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    /// Prompt field and submit action are disabled while loading.
    pub fn input_enabled(&self) -> bool {
        !self.loading()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match &self.phase {
            Phase::Success { image_url } => Some(image_url),
            _ => None,
        }
    }
}

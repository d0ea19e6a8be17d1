use tokio::sync::RwLock;

use super::{
    enums::{api_status::ApiStatus, phase::Phase},
    errors::EMPTY_PROMPT_MESSAGE,
    models::ui_state::UiState,
    service::ImageGenerationClient,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A generation was already in flight; nothing was sent.
    Busy,
    /// The prompt was blank; nothing was sent.
    Rejected,
    Succeeded,
    Failed,
}

/// One UI instance: its state plus the client it submits through.
///
/// The loading check and the move to [`Phase::Submitting`] happen under a
/// single write lock, so at most one generation is in flight per session.
/// A new attempt replaces the previous phase, which clears any earlier image.
pub struct Session<C> {
    client: C,
    state: RwLock<UiState>,
}

impl<C: ImageGenerationClient> Session<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: RwLock::new(UiState::default()),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn snapshot(&self) -> UiState {
        self.state.read().await.clone()
    }

    /// One-time reachability check; informational only.
    pub async fn probe_api_status(&self) -> ApiStatus {
        let api_status = self.client.check_status().await;
        self.state.write().await.api_status = api_status;

        api_status
    }

    /// Returns `false` when the input is disabled because a generation is
    /// in flight.
    pub async fn set_prompt(&self, prompt: impl Into<String>) -> bool {
        let mut state = self.state.write().await;
        if state.loading() {
            return false;
        }

        state.prompt = prompt.into();
        true
    }

    /// Enter inside the prompt field.
    pub async fn press_enter(&self) -> SubmitOutcome {
        self.submit().await
    }

    pub async fn submit(&self) -> SubmitOutcome {
        match self.start(None).await {
            Ok(prompt) => self.finish(prompt).await.0,
            Err(outcome) => outcome,
        }
    }

    /// Types `prompt` and presses Enter as one step.
    pub async fn submit_prompt(&self, prompt: impl Into<String>) -> SubmitOutcome {
        match self.start_submit(prompt).await {
            Ok(prompt) => self.finish(prompt).await.0,
            Err(outcome) => outcome,
        }
    }

    /// Replaces the prompt and enters [`Phase::Submitting`] under one write
    /// lock. On `Ok` the caller owns the generation and must finish it with
    /// [`Session::complete`].
    pub async fn start_submit(&self, prompt: impl Into<String>) -> Result<String, SubmitOutcome> {
        self.start(Some(prompt.into())).await
    }

    /// Sends `prompt` and records the result. Only valid after a successful
    /// [`Session::start_submit`]. Returns the state as it was when the result
    /// landed, before any later submission can replace it.
    pub async fn complete(&self, prompt: String) -> UiState {
        self.finish(prompt).await.1
    }

    async fn finish(&self, prompt: String) -> (SubmitOutcome, UiState) {
        let result = self.client.generate_image(&prompt).await;

        let mut state = self.state.write().await;
        let outcome = match result {
            Ok(image_url) => {
                state.phase = Phase::Success { image_url };
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                tracing::error!(%e, "image generation failed");
                state.phase = Phase::Failed {
                    error: e.user_message(),
                };
                SubmitOutcome::Failed
            }
        };

        (outcome, state.clone())
    }

    async fn start(&self, prompt: Option<String>) -> Result<String, SubmitOutcome> {
        let mut state = self.state.write().await;
        if state.loading() {
            return Err(SubmitOutcome::Busy);
        }

        if let Some(prompt) = prompt {
            state.prompt = prompt;
        }

        if state.prompt.trim().is_empty() {
            state.phase = Phase::Failed {
                error: EMPTY_PROMPT_MESSAGE.to_string(),
            };
            return Err(SubmitOutcome::Rejected);
        }

        state.phase = Phase::Submitting;
        Ok(state.prompt.to_string())
    }
}

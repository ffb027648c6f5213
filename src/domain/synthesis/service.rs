use super::dto::{ApiKey, SpeechRequest, SpeechSettings};
use super::error::SynthesisError;
use crate::infrastructure::repositories::SpeechRepository;
use std::sync::Arc;

/// Published price of the standard model, per input character
const COST_PER_CHARACTER_USD: f64 = 0.000015;

/// Rough cost of synthesizing `text`, in US dollars
pub fn estimate_cost(text: &str) -> f64 {
    text.chars().count() as f64 * COST_PER_CHARACTER_USD
}

/// Turns narration text into audio through a speech repository.
///
/// The credential is handed in explicitly; a client without one fails every
/// call with `MissingCredential` before touching the network.
#[derive(Clone)]
pub struct SynthesisClient {
    api_key: Option<ApiKey>,
    settings: SpeechSettings,
    speech_repo: Arc<dyn SpeechRepository>,
}

impl SynthesisClient {
    pub fn new(
        api_key: Option<ApiKey>,
        settings: SpeechSettings,
        speech_repo: Arc<dyn SpeechRepository>,
    ) -> Self {
        Self {
            api_key,
            settings,
            speech_repo,
        }
    }

    pub fn settings(&self) -> &SpeechSettings {
        &self.settings
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Same credential and transport, different voice/model/speed/format
    pub fn with_settings(&self, settings: SpeechSettings) -> Self {
        Self {
            settings,
            ..self.clone()
        }
    }

    /// Synthesize `text` with a single request.
    ///
    /// # Errors
    /// - `MissingCredential` / `EmptyInput` before any request is made
    /// - `UpstreamRejected` when the service answers with a non-success status
    /// - `Transport` on network failure or timeout
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SynthesisError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(SynthesisError::MissingCredential)?;

        if text.trim().is_empty() {
            return Err(SynthesisError::EmptyInput);
        }

        tracing::info!(
            voice = %self.settings.voice,
            model = %self.settings.model,
            speed = ?self.settings.speed,
            format = %self.settings.format,
            text_length = text.chars().count(),
            estimated_cost_usd = format!("{:.4}", estimate_cost(text)),
            "Synthesizing narration"
        );

        let request = SpeechRequest::new(text, &self.settings);
        self.speech_repo.create_speech(api_key, &request).await
    }
}

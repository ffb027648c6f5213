use super::speech_repository::SpeechRepository;
use crate::domain::synthesis::{ApiKey, SpeechRequest, SynthesisError};
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible `/audio/speech` implementation of the speech repository
pub struct OpenAiSpeechRepository {
    endpoint: String,
    http_client: reqwest::Client,
}

impl OpenAiSpeechRepository {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SynthesisError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("episode-voiceover/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            endpoint: format!("{}/audio/speech", base_url.trim_end_matches('/')),
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SpeechRepository for OpenAiSpeechRepository {
    async fn create_speech(
        &self,
        api_key: &ApiKey,
        request: &SpeechRequest,
    ) -> Result<Vec<u8>, SynthesisError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            endpoint = %self.endpoint,
            model = %request.model,
            voice = %request.voice,
            text_length = request.input.len(),
            "Calling speech API"
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, endpoint = %self.endpoint, "Speech API call failed");
                SynthesisError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "Speech API rejected the request"
            );
            return Err(SynthesisError::UpstreamRejected {
                status: status.as_u16(),
                body,
            });
        }

        let audio = response.bytes().await?.to_vec();

        tracing::info!(
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio.len(),
            "Speech audio received"
        );

        Ok(audio)
    }
}

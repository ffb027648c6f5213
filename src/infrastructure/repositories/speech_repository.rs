use crate::domain::synthesis::{ApiKey, SpeechRequest, SynthesisError};
use async_trait::async_trait;

/// Transport for speech synthesis requests.
/// Abstracts the HTTP provider so the pipeline can run against a test double.
///
/// Implementations must:
/// - Send exactly one request per call (no retries, no batching)
/// - Return the response body verbatim on success
/// - Map non-success responses to `SynthesisError::UpstreamRejected`
/// - Map network failures and timeouts to `SynthesisError::Transport`
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize `request.input` and return the encoded audio bytes
    async fn create_speech(
        &self,
        api_key: &ApiKey,
        request: &SpeechRequest,
    ) -> Result<Vec<u8>, SynthesisError>;
}

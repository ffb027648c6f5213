use anyhow::Result;
use episode_voiceover::domain::episode::EpisodeResolver;
use episode_voiceover::domain::synthesis::{ApiKey, SpeechSettings, SynthesisClient};
use episode_voiceover::domain::voiceover::VoiceoverService;
use episode_voiceover::infrastructure::repositories::OpenAiSpeechRepository;
use std::sync::Arc;
use std::time::Duration;

pub mod assertions;
pub mod fixtures;

use fixtures::EpisodeFixtures;
use speech_server::{SpeechServer, StubBehavior};

pub const TEST_API_KEY: &str = "sk-test";

pub struct TestContext {
    pub server: SpeechServer,
    pub episodes: EpisodeFixtures,
}

impl TestContext {
    /// Stub server answering with mock audio, and an empty episodes directory
    pub async fn new() -> Result<Self> {
        Self::with_behavior(StubBehavior::Audio(speech_server::mock_audio_bytes())).await
    }

    pub async fn with_behavior(behavior: StubBehavior) -> Result<Self> {
        Ok(Self {
            server: SpeechServer::start(behavior).await?,
            episodes: EpisodeFixtures::new()?,
        })
    }

    pub fn speech_repo(&self, timeout: Duration) -> Result<Arc<OpenAiSpeechRepository>> {
        Ok(Arc::new(OpenAiSpeechRepository::new(
            &self.server.base_url,
            timeout,
        )?))
    }

    /// Pipeline wired to the stub server over real HTTP
    pub fn service(
        &self,
        api_key: Option<&str>,
        settings: SpeechSettings,
        pacing: bool,
    ) -> Result<VoiceoverService> {
        let client = SynthesisClient::new(
            api_key.and_then(ApiKey::new),
            settings,
            self.speech_repo(Duration::from_secs(10))?,
        );
        Ok(VoiceoverService::new(
            EpisodeResolver::new(self.episodes.path()),
            client,
            pacing,
        ))
    }
}

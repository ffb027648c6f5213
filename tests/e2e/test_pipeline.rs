use crate::e2e::helpers;

use episode_voiceover::domain::episode::EpisodeError;
use episode_voiceover::domain::script::ScriptError;
use episode_voiceover::domain::synthesis::{AudioFormat, SpeechModel, SpeechSettings, SynthesisError, Voice};
use episode_voiceover::error::AppError;
use helpers::assertions::{assert_speech_request, input_of};
use helpers::fixtures::NO_NARRATION_SCRIPT;
use helpers::speech_server::{mock_audio_bytes, StubBehavior};
use helpers::{TestContext, TEST_API_KEY};
use pretty_assertions::assert_eq;

const PACED_NARRATION: &str = "Every website you've ever visited is built with HTML. ... \
But what about style? ... That's CSS ... the styling layer. ...";

const PLAIN_NARRATION: &str = "Every website you've ever visited is built with HTML. \
But what about style? That's CSS — the styling layer.";

#[tokio::test]
async fn it_should_generate_voiceover_from_revised_script() {
    let ctx = TestContext::new().await.unwrap();
    let episode_dir = ctx.episodes.css_intro().unwrap();
    let service = ctx
        .service(Some(TEST_API_KEY), SpeechSettings::default(), true)
        .unwrap();

    let outcome = service.generate(1).await.unwrap();

    assert_eq!(outcome.episode.name, "ep01-css-intro");
    assert_eq!(outcome.episode.script_file_name(), "script_revised.md");
    assert_eq!(outcome.output_path, episode_dir.join("voiceover.mp3"));
    assert_eq!(std::fs::read(&outcome.output_path).unwrap(), mock_audio_bytes());

    let requests = ctx.server.requests();
    assert_eq!(requests.len(), 1);
    assert_speech_request(&requests[0], "shimmer", "tts-1", "mp3");
    assert_eq!(input_of(&requests[0]), PACED_NARRATION);
    assert_eq!(requests[0].body["speed"].as_f64().map(|s| (s * 100.0).round()), Some(95.0));
}

#[tokio::test]
async fn it_should_send_plain_narration_when_pacing_is_off() {
    let ctx = TestContext::new().await.unwrap();
    ctx.episodes.css_intro().unwrap();
    let settings = SpeechSettings {
        voice: Voice::Nova,
        model: SpeechModel::Tts1Hd,
        speed: None,
        format: AudioFormat::Opus,
    };
    let service = ctx.service(Some(TEST_API_KEY), settings, false).unwrap();

    let outcome = service.generate(1).await.unwrap();

    assert!(outcome.output_path.ends_with("voiceover.opus"));
    let requests = ctx.server.requests();
    assert_speech_request(&requests[0], "nova", "tts-1-hd", "opus");
    assert_eq!(input_of(&requests[0]), PLAIN_NARRATION);
    assert!(requests[0].body.get("speed").is_none());
}

#[tokio::test]
async fn it_should_fall_back_to_original_script() {
    let ctx = TestContext::new().await.unwrap();
    ctx.episodes
        .add_episode("ep03-layout", &[("script.md", "## Voiceover Script\nFlexbox first.\n---\n")])
        .unwrap();
    let service = ctx
        .service(Some(TEST_API_KEY), SpeechSettings::default(), true)
        .unwrap();

    service.generate(3).await.unwrap();

    assert_eq!(input_of(&ctx.server.requests()[0]), "Flexbox first. ...");
}

#[tokio::test]
async fn it_should_overwrite_previous_audio() {
    let ctx = TestContext::new().await.unwrap();
    let episode_dir = ctx.episodes.css_intro().unwrap();
    std::fs::write(episode_dir.join("voiceover.mp3"), b"stale audio from last run").unwrap();
    let service = ctx
        .service(Some(TEST_API_KEY), SpeechSettings::default(), true)
        .unwrap();

    service.generate(1).await.unwrap();

    assert_eq!(
        std::fs::read(episode_dir.join("voiceover.mp3")).unwrap(),
        mock_audio_bytes()
    );
}

#[tokio::test]
async fn it_should_not_match_episode_ten_for_episode_one() {
    let ctx = TestContext::new().await.unwrap();
    ctx.episodes
        .add_episode("ep10-bar", &[("script.md", "## Voiceover Script\nTen.\n")])
        .unwrap();
    let service = ctx
        .service(Some(TEST_API_KEY), SpeechSettings::default(), true)
        .unwrap();

    let err = service.generate(1).await.unwrap_err();

    assert!(matches!(err, AppError::Episode(EpisodeError::EpisodeNotFound { .. })));
    assert_eq!(ctx.server.request_count(), 0);
}

#[tokio::test]
async fn it_should_fail_when_episode_has_no_script() {
    let ctx = TestContext::new().await.unwrap();
    ctx.episodes
        .add_episode("ep04-empty", &[("notes.md", "todo")])
        .unwrap();
    let service = ctx
        .service(Some(TEST_API_KEY), SpeechSettings::default(), true)
        .unwrap();

    let err = service.generate(4).await.unwrap_err();

    assert!(matches!(err, AppError::Episode(EpisodeError::ScriptNotFound { .. })));
    assert_eq!(ctx.server.request_count(), 0);
}

#[tokio::test]
async fn it_should_fail_when_script_has_no_narration() {
    let ctx = TestContext::new().await.unwrap();
    let episode_dir = ctx
        .episodes
        .add_episode("ep02-selectors", &[("script.md", NO_NARRATION_SCRIPT)])
        .unwrap();
    let service = ctx
        .service(Some(TEST_API_KEY), SpeechSettings::default(), true)
        .unwrap();

    let err = service.generate(2).await.unwrap_err();

    assert!(matches!(err, AppError::Script(ScriptError::SectionNotFound { .. })));
    assert_eq!(ctx.server.request_count(), 0);
    assert!(!episode_dir.join("voiceover.mp3").exists());
}

#[tokio::test]
async fn it_should_not_call_the_api_without_credential() {
    let ctx = TestContext::new().await.unwrap();
    let episode_dir = ctx.episodes.css_intro().unwrap();
    let service = ctx.service(None, SpeechSettings::default(), true).unwrap();

    let err = service.generate(1).await.unwrap_err();

    assert!(matches!(err, AppError::Synthesis(SynthesisError::MissingCredential)));
    assert_eq!(ctx.server.request_count(), 0);
    assert!(!episode_dir.join("voiceover.mp3").exists());
}

#[tokio::test]
async fn it_should_not_write_output_when_upstream_rejects() {
    let ctx = TestContext::with_behavior(StubBehavior::Reject(
        400,
        r#"{"error":{"message":"Input is too long","type":"invalid_request_error"}}"#.to_string(),
    ))
    .await
    .unwrap();
    let episode_dir = ctx.episodes.css_intro().unwrap();
    let service = ctx
        .service(Some(TEST_API_KEY), SpeechSettings::default(), true)
        .unwrap();

    let err = service.generate(1).await.unwrap_err();

    match err {
        AppError::Synthesis(SynthesisError::UpstreamRejected { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("Input is too long"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(ctx.server.request_count(), 1);
    assert!(!episode_dir.join("voiceover.mp3").exists());
}

#[tokio::test]
async fn it_should_recover_on_next_run_after_rejection() {
    let ctx = TestContext::with_behavior(StubBehavior::Reject(500, "overloaded".to_string()))
        .await
        .unwrap();
    ctx.episodes.css_intro().unwrap();
    let service = ctx
        .service(Some(TEST_API_KEY), SpeechSettings::default(), true)
        .unwrap();

    assert!(service.generate(1).await.is_err());
    assert_eq!(ctx.server.request_count(), 1);

    ctx.server.set_behavior(StubBehavior::Audio(mock_audio_bytes()));
    let outcome = service.generate(1).await.unwrap();

    assert_eq!(outcome.audio_size, mock_audio_bytes().len());
    assert_eq!(ctx.server.request_count(), 2);
}

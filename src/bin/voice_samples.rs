use anyhow::Context;
use clap::Parser;
use episode_voiceover::domain::synthesis::{
    SpeechModel, SpeechSettings, SynthesisClient, SynthesisError, Voice,
};
use episode_voiceover::infrastructure::config::Config;
use episode_voiceover::infrastructure::logging::init_logging;
use episode_voiceover::infrastructure::repositories::OpenAiSpeechRepository;
use std::path::PathBuf;
use std::sync::Arc;

const SAMPLE_TEXT: &str = "Every website you've ever visited is built with HTML. \
    But if the internet were only HTML... it would look terrible. \
    This is HTML without any styling. Default fonts, no colors, no spacing. Just raw content.";

/// Render the same sample with every voice so they can be compared by ear
#[derive(Debug, Parser)]
#[command(name = "voice-samples", version)]
struct Cli {
    #[arg(long, default_value = "audio/voice-tests")]
    output_dir: PathBuf,

    #[arg(long)]
    model: Option<SpeechModel>,

    /// Text to speak instead of the built-in sample
    #[arg(long)]
    text: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_logging(config.log_format);

    if config.api_key.is_none() {
        return Err(SynthesisError::MissingCredential.into());
    }

    let speech_repo = Arc::new(OpenAiSpeechRepository::new(
        &config.api_base_url,
        config.request_timeout,
    )?);
    // Samples use the service default speed so voices are compared as-is
    let base_settings = SpeechSettings {
        model: cli.model.unwrap_or_else(|| config.speech.model.clone()),
        speed: None,
        ..config.speech.clone()
    };
    let client = SynthesisClient::new(config.api_key.clone(), base_settings.clone(), speech_repo);

    tokio::fs::create_dir_all(&cli.output_dir)
        .await
        .with_context(|| format!("creating {}", cli.output_dir.display()))?;

    let text = cli.text.as_deref().unwrap_or(SAMPLE_TEXT);
    println!("Voice samples ({})", base_settings.model);
    println!("====================\n");
    println!("Sample text ({} chars):", text.chars().count());
    println!("\"{}...\"\n", text.chars().take(80).collect::<String>());
    println!("Generating {} voice samples...\n", Voice::ALL.len());

    let mut failures = 0;
    for voice in Voice::ALL {
        let voice_client = client.with_settings(SpeechSettings {
            voice,
            ..base_settings.clone()
        });
        let file_name = format!("{}.{}", voice, base_settings.format.extension());
        let output_path = cli.output_dir.join(&file_name);

        let result = match voice_client.synthesize(text).await {
            Ok(audio) => tokio::fs::write(&output_path, audio)
                .await
                .with_context(|| format!("writing {}", output_path.display())),
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(()) => println!("  {:<8} ✓ saved to {}", voice.as_str(), output_path.display()),
            Err(e) => {
                failures += 1;
                tracing::warn!(voice = %voice, error = %e, "Voice sample failed");
                println!("  {:<8} ✗ {}", voice.as_str(), e);
            }
        }
    }

    println!("\nVoice characteristics:");
    for voice in Voice::ALL {
        println!("  {:<8} - {}", voice.as_str(), voice.character());
    }

    if failures == Voice::ALL.len() {
        anyhow::bail!("every voice sample failed");
    }

    Ok(())
}

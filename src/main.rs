use clap::Parser;
use episode_voiceover::domain::episode::EpisodeResolver;
use episode_voiceover::domain::synthesis::{
    parse_speed, AudioFormat, SpeechModel, SynthesisClient, SynthesisError, Voice,
};
use episode_voiceover::domain::voiceover::VoiceoverService;
use episode_voiceover::error::AppResult;
use episode_voiceover::infrastructure::config::Config;
use episode_voiceover::infrastructure::logging::init_logging;
use episode_voiceover::infrastructure::repositories::OpenAiSpeechRepository;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

/// Generate the voiceover for an episode from its markdown script
#[derive(Debug, Parser)]
#[command(name = "voiceover", version)]
struct Cli {
    /// Episode number, e.g. 1 for the `ep01-*` folder
    episode: u32,

    /// Folder containing the `epNN-*` episode folders
    #[arg(long)]
    episodes_dir: Option<PathBuf>,

    /// Speech model, e.g. tts-1 or tts-1-hd
    #[arg(long)]
    model: Option<SpeechModel>,

    #[arg(long)]
    voice: Option<Voice>,

    /// Speed multiplier (0.25 to 4.0), or `none` to use the service default
    #[arg(long)]
    speed: Option<SpeedArg>,

    #[arg(long)]
    format: Option<AudioFormat>,

    /// Send the narration without inserted pauses
    #[arg(long)]
    no_pacing: bool,

    /// Output file name inside the episode folder (default: voiceover.<format>)
    #[arg(long)]
    output: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct SpeedArg(Option<f32>);

impl FromStr for SpeedArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_speed(s).map(SpeedArg)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\nError: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    init_logging(config.log_format);

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Voiceover generation failed");
            eprintln!("\nError: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli, mut config: Config) -> AppResult<()> {
    if let Some(dir) = cli.episodes_dir {
        config.episodes_dir = dir;
    }
    if let Some(model) = cli.model {
        config.speech.model = model;
    }
    if let Some(voice) = cli.voice {
        config.speech.voice = voice;
    }
    if let Some(SpeedArg(speed)) = cli.speed {
        config.speech.speed = speed;
    }
    if let Some(format) = cli.format {
        config.speech.format = format;
    }
    if cli.no_pacing {
        config.pacing_enabled = false;
    }

    let speech_repo = Arc::new(OpenAiSpeechRepository::new(
        &config.api_base_url,
        config.request_timeout,
    )?);
    let synthesis = SynthesisClient::new(config.api_key.clone(), config.speech.clone(), speech_repo);
    if !synthesis.has_credential() {
        return Err(SynthesisError::MissingCredential.into());
    }

    let mut service = VoiceoverService::new(
        EpisodeResolver::new(&config.episodes_dir),
        synthesis,
        config.pacing_enabled,
    );
    if let Some(output) = cli.output {
        service = service.with_output_file_name(output);
    }

    let episode = service.resolve(cli.episode)?;
    println!("\nGenerating voiceover for {}", episode.name);
    println!("{}", "=".repeat(40));
    println!("  Script: {}", episode.script_file_name());

    let narration = service.narration_for(&episode).await?;
    println!("\nExtracted text preview:");
    println!("  \"{}...\"\n", preview(&narration.text, 80));
    if config.pacing_enabled {
        println!("With pacing:");
        println!("  \"{}...\"\n", preview(&narration.spoken, 100));
    }

    let speech = &config.speech;
    println!("  Using voice: {}", speech.voice);
    println!("  Using model: {}", speech.model);
    match speech.speed {
        Some(speed) => println!("  Speed: {}x", speed),
        None => println!("  Speed: default"),
    }
    println!("  Text length: {} characters", narration.spoken.chars().count());
    println!("\nGenerating audio...");

    let outcome = service.render(episode, narration).await?;

    println!(
        "✓ Saved to {}/{} ({} bytes)",
        outcome.episode.name,
        service.output_file_name(),
        outcome.audio_size
    );
    println!("  Estimated cost: ${:.4}", outcome.estimated_cost_usd);

    Ok(())
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

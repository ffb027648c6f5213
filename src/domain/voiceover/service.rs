use crate::domain::episode::{Episode, EpisodeResolver};
use crate::domain::script::{add_pacing, extract_section, normalize, ScriptError, VOICEOVER_SECTION_LABEL};
use crate::domain::synthesis::{estimate_cost, SynthesisClient};
use crate::error::{AppError, AppResult};
use std::path::PathBuf;

/// Narration prepared from a script, before synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    /// Extracted and normalized text
    pub text: String,
    /// Text actually sent to the speech API (paced when pacing is enabled)
    pub spoken: String,
}

#[derive(Debug, Clone)]
pub struct VoiceoverOutcome {
    pub episode: Episode,
    pub narration: Narration,
    pub audio_size: usize,
    pub output_path: PathBuf,
    pub estimated_cost_usd: f64,
}

/// Extract, clean and optionally pace the narration of a script document
pub fn prepare_narration(markdown: &str, pacing: bool) -> Result<Narration, ScriptError> {
    let section = extract_section(markdown, VOICEOVER_SECTION_LABEL)?;
    let text = normalize(section);
    let spoken = if pacing { add_pacing(&text) } else { text.clone() };

    Ok(Narration { text, spoken })
}

/// Runs the whole voiceover pipeline for one episode
pub struct VoiceoverService {
    resolver: EpisodeResolver,
    synthesis: SynthesisClient,
    pacing: bool,
    output_file_name: String,
}

impl VoiceoverService {
    pub fn new(resolver: EpisodeResolver, synthesis: SynthesisClient, pacing: bool) -> Self {
        let output_file_name = format!("voiceover.{}", synthesis.settings().format.extension());
        Self {
            resolver,
            synthesis,
            pacing,
            output_file_name,
        }
    }

    /// Write the audio under a different file name inside the episode folder
    pub fn with_output_file_name(mut self, name: impl Into<String>) -> Self {
        self.output_file_name = name.into();
        self
    }

    pub fn output_file_name(&self) -> &str {
        &self.output_file_name
    }

    pub fn resolve(&self, episode_number: u32) -> AppResult<Episode> {
        Ok(self.resolver.resolve(episode_number)?)
    }

    /// Read the episode's script and prepare its narration
    pub async fn narration_for(&self, episode: &Episode) -> AppResult<Narration> {
        let markdown = tokio::fs::read_to_string(&episode.script_path)
            .await
            .map_err(|e| AppError::io(&episode.script_path, e))?;

        let narration = prepare_narration(&markdown, self.pacing)?;

        tracing::info!(
            episode = %episode.name,
            script = %episode.script_file_name(),
            narration_length = narration.text.chars().count(),
            spoken_length = narration.spoken.chars().count(),
            pacing = self.pacing,
            "Narration prepared"
        );

        Ok(narration)
    }

    /// Synthesize a prepared narration and write the audio into the episode folder.
    /// Nothing is written unless synthesis succeeds.
    pub async fn render(&self, episode: Episode, narration: Narration) -> AppResult<VoiceoverOutcome> {
        let audio = self.synthesis.synthesize(&narration.spoken).await?;

        let output_path = episode.dir.join(&self.output_file_name);
        tokio::fs::write(&output_path, &audio)
            .await
            .map_err(|e| AppError::io(&output_path, e))?;

        tracing::info!(
            episode = %episode.name,
            output = %output_path.display(),
            audio_size_bytes = audio.len(),
            "Voiceover written"
        );

        Ok(VoiceoverOutcome {
            estimated_cost_usd: estimate_cost(&narration.spoken),
            audio_size: audio.len(),
            episode,
            narration,
            output_path,
        })
    }

    /// Resolve, prepare, synthesize and write in one go
    pub async fn generate(&self, episode_number: u32) -> AppResult<VoiceoverOutcome> {
        let episode = self.resolve(episode_number)?;
        let narration = self.narration_for(&episode).await?;
        self.render(episode, narration).await
    }
}

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Voices offered by the speech API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Alloy,
    Echo,
    Fable,
    Nova,
    Onyx,
    Shimmer,
}

impl Voice {
    pub const ALL: [Voice; 6] = [
        Voice::Alloy,
        Voice::Echo,
        Voice::Fable,
        Voice::Nova,
        Voice::Onyx,
        Voice::Shimmer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Alloy => "alloy",
            Voice::Echo => "echo",
            Voice::Fable => "fable",
            Voice::Nova => "nova",
            Voice::Onyx => "onyx",
            Voice::Shimmer => "shimmer",
        }
    }

    /// Short description used when comparing samples
    pub fn character(&self) -> &'static str {
        match self {
            Voice::Alloy => "Neutral, balanced",
            Voice::Echo => "Warm, conversational",
            Voice::Fable => "Expressive, storytelling",
            Voice::Nova => "Friendly, upbeat",
            Voice::Onyx => "Deep, authoritative",
            Voice::Shimmer => "Clear, gentle",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Voice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voice::ALL
            .into_iter()
            .find(|voice| voice.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = Voice::ALL.iter().map(Voice::as_str).collect();
                format!("unknown voice '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Model / quality tier. Unknown names are passed through to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechModel {
    Tts1,
    Tts1Hd,
    Other(String),
}

impl SpeechModel {
    pub fn as_str(&self) -> &str {
        match self {
            SpeechModel::Tts1 => "tts-1",
            SpeechModel::Tts1Hd => "tts-1-hd",
            SpeechModel::Other(name) => name,
        }
    }
}

impl fmt::Display for SpeechModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SpeechModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("model name cannot be empty".to_string()),
            "tts-1" => Ok(SpeechModel::Tts1),
            "tts-1-hd" => Ok(SpeechModel::Tts1Hd),
            other => Ok(SpeechModel::Other(other.to_string())),
        }
    }
}

impl Serialize for SpeechModel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    Opus,
    Aac,
    Flac,
    Wav,
    Pcm,
}

impl AudioFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Opus => "opus",
            AudioFormat::Aac => "aac",
            AudioFormat::Flac => "flac",
            AudioFormat::Wav => "wav",
            AudioFormat::Pcm => "pcm",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for AudioFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mp3" => Ok(AudioFormat::Mp3),
            "opus" => Ok(AudioFormat::Opus),
            "aac" => Ok(AudioFormat::Aac),
            "flac" => Ok(AudioFormat::Flac),
            "wav" => Ok(AudioFormat::Wav),
            "pcm" => Ok(AudioFormat::Pcm),
            other => Err(format!("unknown audio format '{}'", other)),
        }
    }
}

/// Fixed per-run configuration for synthesis requests
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechSettings {
    pub voice: Voice,
    pub model: SpeechModel,
    /// Speed multiplier; the API accepts 0.25 to 4.0 and rejects anything else
    pub speed: Option<f32>,
    pub format: AudioFormat,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            voice: Voice::Shimmer,
            model: SpeechModel::Tts1,
            speed: Some(0.95),
            format: AudioFormat::Mp3,
        }
    }
}

/// Parse a speed setting. `none` means the request carries no speed field.
pub fn parse_speed(value: &str) -> Result<Option<f32>, String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    let speed: f32 = value.parse().map_err(|e| format!("{}", e))?;
    if !speed.is_finite() || speed <= 0.0 {
        return Err(format!("speed must be a positive number, got '{}'", value));
    }
    Ok(Some(speed))
}

/// Body of `POST /audio/speech`
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest {
    pub model: SpeechModel,
    pub input: String,
    pub voice: Voice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    pub response_format: AudioFormat,
}

impl SpeechRequest {
    pub fn new(input: impl Into<String>, settings: &SpeechSettings) -> Self {
        Self {
            model: settings.model.clone(),
            input: input.into(),
            voice: settings.voice,
            speed: settings.speed,
            response_format: settings.format,
        }
    }
}

/// Bearer credential for the speech API. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Blank values count as no credential
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

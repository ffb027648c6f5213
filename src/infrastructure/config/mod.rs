use crate::domain::synthesis::{parse_speed, ApiKey, AudioFormat, SpeechModel, SpeechSettings, Voice};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::DEFAULT_BASE_URL;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<ApiKey>,
    pub api_base_url: String,
    pub speech: SpeechSettings,
    pub pacing_enabled: bool,
    pub request_timeout: Duration,
    pub episodes_dir: PathBuf,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load `.env` (if present) and read the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SpeechSettings::default();

        let speed = match lookup("TTS_SPEED") {
            Some(value) => parse_speed(&value)
                .map_err(|e| AppError::Config(format!("invalid TTS_SPEED: {}", e)))?,
            None => defaults.speed,
        };

        let timeout_secs: u64 = parse_or("TTS_TIMEOUT_SECS", &lookup, 120)?;
        if timeout_secs == 0 {
            return Err(AppError::Config(
                "invalid TTS_TIMEOUT_SECS: must be at least 1".to_string(),
            ));
        }

        let config = Config {
            api_key: lookup("OPENAI_API_KEY").and_then(ApiKey::new),
            api_base_url: lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            speech: SpeechSettings {
                voice: parse_or("TTS_VOICE", &lookup, defaults.voice)?,
                model: parse_or("TTS_MODEL", &lookup, defaults.model)?,
                speed,
                format: parse_or("TTS_FORMAT", &lookup, defaults.format)?,
            },
            pacing_enabled: lookup("TTS_PACING")
                .map(|s| !matches!(s.trim().to_lowercase().as_str(), "false" | "0" | "off" | "no"))
                .unwrap_or(true),
            request_timeout: Duration::from_secs(timeout_secs),
            episodes_dir: lookup("EPISODES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("src/episodes")),
            log_format: lookup("LOG_FORMAT")
                .map(|s| match s.trim().to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
        };

        Ok(config)
    }
}

fn parse_value<T>(key: &str, value: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| AppError::Config(format!("invalid {}: {}", key, e)))
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => parse_value(key, &value),
        None => Ok(default),
    }
}

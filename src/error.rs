use crate::domain::episode::EpisodeError;
use crate::domain::script::ScriptError;
use crate::domain::synthesis::SynthesisError;
use std::path::PathBuf;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Episode(#[from] EpisodeError),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error (sysexits.h classes)
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Script(_) | Self::Synthesis(SynthesisError::EmptyInput) => 65,
            Self::Episode(EpisodeError::EpisodesDirUnreadable { .. }) => 74,
            Self::Episode(_) => 66,
            Self::Synthesis(SynthesisError::MissingCredential) | Self::Config(_) => 78,
            Self::Synthesis(_) => 69,
            Self::Io { .. } => 74,
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

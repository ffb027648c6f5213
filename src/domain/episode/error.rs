use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EpisodeError {
    #[error("no episode folder found starting with \"{prefix}\" in {}", .episodes_dir.display())]
    EpisodeNotFound { prefix: String, episodes_dir: PathBuf },

    #[error("no script found in {}", .episode_dir.display())]
    ScriptNotFound { episode_dir: PathBuf },

    #[error("cannot read episodes directory {}: {source}", .path.display())]
    EpisodesDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

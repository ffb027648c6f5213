use super::error::EpisodeError;
use std::fs;
use std::path::{Path, PathBuf};

/// Script names in order of preference
const SCRIPT_CANDIDATES: [&str; 2] = ["script_revised.md", "script.md"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub number: u32,
    /// Folder name, e.g. `ep01-css-intro`
    pub name: String,
    pub dir: PathBuf,
    pub script_path: PathBuf,
}

impl Episode {
    pub fn script_file_name(&self) -> String {
        self.script_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Locates episode folders (`epNN-*`) inside an episodes directory
#[derive(Debug, Clone)]
pub struct EpisodeResolver {
    episodes_dir: PathBuf,
}

impl EpisodeResolver {
    pub fn new(episodes_dir: impl Into<PathBuf>) -> Self {
        Self {
            episodes_dir: episodes_dir.into(),
        }
    }

    pub fn episodes_dir(&self) -> &Path {
        &self.episodes_dir
    }

    /// Folder prefix for an episode number: `1` -> `ep01`, `123` -> `ep123`
    pub fn prefix_for(number: u32) -> String {
        format!("ep{:02}", number)
    }

    /// Find the episode folder and pick its script, preferring the revised one.
    pub fn resolve(&self, number: u32) -> Result<Episode, EpisodeError> {
        let prefix = Self::prefix_for(number);
        let name = self.find_episode_dir(&prefix)?;
        let dir = self.episodes_dir.join(&name);

        let script_path = SCRIPT_CANDIDATES
            .iter()
            .map(|candidate| dir.join(candidate))
            .find(|path| path.is_file())
            .ok_or_else(|| EpisodeError::ScriptNotFound {
                episode_dir: dir.clone(),
            })?;

        tracing::debug!(
            episode = %name,
            script = %script_path.display(),
            "Episode resolved"
        );

        Ok(Episode {
            number,
            name,
            dir,
            script_path,
        })
    }

    fn find_episode_dir(&self, prefix: &str) -> Result<String, EpisodeError> {
        let unreadable = |source: std::io::Error| EpisodeError::EpisodesDirUnreadable {
            path: self.episodes_dir.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.episodes_dir).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();

        names
            .into_iter()
            .find(|name| matches_prefix(name, prefix))
            .ok_or_else(|| EpisodeError::EpisodeNotFound {
                prefix: prefix.to_string(),
                episodes_dir: self.episodes_dir.clone(),
            })
    }
}

/// `ep01` matches `ep01-intro` and `ep01` but not `ep010-outro`
fn matches_prefix(name: &str, prefix: &str) -> bool {
    match name.strip_prefix(prefix) {
        Some(rest) => !rest.starts_with(|c: char| c.is_ascii_digit()),
        None => false,
    }
}

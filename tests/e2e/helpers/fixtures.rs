use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const REVISED_SCRIPT: &str = "# Episode 1: CSS Intro\n\n\
## Voiceover Script (revised)\n\n\
[0:00] Every website you've ever visited is built with HTML.\n\
*pause*\n\
[0:04] But what about style? That's CSS — the styling layer.\n\n\
---\n\n\
## Visual Notes\n\n\
Show an unstyled page.\n";

pub const ORIGINAL_SCRIPT: &str = "## Voiceover Script\n\
This is the first draft.\n\
---\n";

pub const NO_NARRATION_SCRIPT: &str = "# Episode 2\n\n## Outline\n\n- selectors\n- colors\n";

/// Temporary episodes directory with `epNN-*` folders
pub struct EpisodeFixtures {
    root: TempDir,
}

impl EpisodeFixtures {
    pub fn new() -> Result<Self> {
        Ok(Self {
            root: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Create an episode folder holding the given `(file name, contents)` pairs
    pub fn add_episode(&self, folder: &str, files: &[(&str, &str)]) -> Result<PathBuf> {
        let dir = self.root.path().join(folder);
        fs::create_dir_all(&dir)?;
        for (name, contents) in files {
            fs::write(dir.join(name), contents)?;
        }
        Ok(dir)
    }

    /// Episode 1 with both script variants
    pub fn css_intro(&self) -> Result<PathBuf> {
        self.add_episode(
            "ep01-css-intro",
            &[
                ("script.md", ORIGINAL_SCRIPT),
                ("script_revised.md", REVISED_SCRIPT),
            ],
        )
    }
}

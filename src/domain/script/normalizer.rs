use once_cell::sync::Lazy;
use regex::Regex;

static TIMESTAMP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\d{1,2}:\d{1,2}\]").expect("timestamp pattern is valid"));

// Any single-asterisk span, markdown emphasis included
static STAGE_DIRECTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*[^*]+\*").expect("stage direction pattern is valid"));

static NEWLINES_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n+").expect("newline pattern is valid"));

static WHITESPACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Turn a raw narration section into a single line of speakable text.
///
/// Timing cues like `[1:15]` and stage directions like `*pause*` are
/// authoring notes and are dropped before whitespace is collapsed.
pub fn normalize(section: &str) -> String {
    let text = TIMESTAMP_PATTERN.replace_all(section, "");
    let text = STAGE_DIRECTION_PATTERN.replace_all(&text, "");
    let text = NEWLINES_PATTERN.replace_all(&text, " ");
    WHITESPACE_PATTERN
        .replace_all(text.trim(), " ")
        .into_owned()
}

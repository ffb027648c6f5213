use once_cell::sync::Lazy;
use regex::Regex;

/// Token the speech engine renders as a short pause (roughly half a second)
pub const PACING_MARKER: &str = "...";

static SENTENCE_END_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.?])$").expect("sentence end pattern is valid"));

static REPEATED_MARKERS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\.\.\.\s*){2,}").expect("repeated markers pattern is valid"));

/// Insert pauses between sentences and ideas so educational narration is
/// not read too quickly.
///
/// Rules run in order: periods, question marks, em dashes (consumed),
/// colons, then a cleanup that folds adjacent markers into one. A period or
/// question mark that ends the text gets a trailing pause as well.
pub fn add_pacing(text: &str) -> String {
    let paced = text
        .replace(". ", ". ... ")
        .replace("? ", "? ... ")
        .replace(" — ", " ... ")
        .replace('—', " ... ")
        .replace(": ", ": ... ");

    let paced = SENTENCE_END_PATTERN.replace(&paced, "$1 ...");

    REPEATED_MARKERS_PATTERN
        .replace_all(&paced, "... ")
        .trim_end()
        .to_string()
}

use super::error::ScriptError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Label of the heading that introduces the narration in an episode script
pub const VOICEOVER_SECTION_LABEL: &str = "Voiceover Script";

static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})[ \t]+(.*)$").expect("heading pattern is valid"));

static RULE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-{3,}[ \t]*$").expect("rule pattern is valid"));

struct Heading<'a> {
    level: usize,
    text: &'a str,
}

fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let caps = HEADING_PATTERN.captures(line)?;
    Some(Heading {
        level: caps.get(1)?.as_str().len(),
        text: caps.get(2)?.as_str().trim(),
    })
}

/// Yields `(start, end, line)` for every line; `end` includes the line break,
/// `line` has it (and any `\r`) stripped.
fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, usize, &str)> + '_ {
    text.split_inclusive('\n').scan(0usize, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Some((start, *offset, line))
    })
}

/// Extract the body of the section introduced by a heading starting with `label`.
///
/// The body runs from the line after the heading up to the nearest horizontal
/// rule, or the nearest heading of the same or a higher level that does not
/// continue the section (its text starts with the label's first word).
///
/// A section with no terminator is not an error: the body runs to the end of
/// the document, so a script whose narration is its last section still
/// yields text.
///
/// # Errors
/// Returns `ScriptError::SectionNotFound` when no heading carries the label.
pub fn extract_section<'a>(markdown: &'a str, label: &str) -> Result<&'a str, ScriptError> {
    let mut lines = lines_with_offsets(markdown);

    let (level, body_start) = lines
        .by_ref()
        .find_map(|(_, end, line)| {
            parse_heading(line)
                .filter(|heading| heading.text.starts_with(label))
                .map(|heading| (heading.level, end))
        })
        .ok_or_else(|| ScriptError::SectionNotFound {
            label: label.to_string(),
        })?;

    let continuation = label.split_whitespace().next().unwrap_or(label);

    for (start, _, line) in lines {
        if is_terminator(line, level, continuation) {
            // The line break before the terminator belongs to neither side
            let body = &markdown[body_start..start.saturating_sub(1).max(body_start)];
            return Ok(body.strip_suffix('\r').unwrap_or(body));
        }
    }

    Ok(&markdown[body_start..])
}

fn is_terminator(line: &str, section_level: usize, continuation: &str) -> bool {
    if RULE_PATTERN.is_match(line) {
        return true;
    }

    match parse_heading(line) {
        Some(heading) => {
            heading.level <= section_level && !heading.text.starts_with(continuation)
        }
        None => false,
    }
}

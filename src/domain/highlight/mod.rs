//! Small HTML/CSS tokenizer for code shown on screen.
//!
//! Not a parser: each line is scanned left to right and the first matching
//! rule wins, which is enough to color short snippets.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `<div`, `</p`, `>` and `/>`
    Tag,
    /// Attribute name before `=`
    Attribute,
    /// Double-quoted string, quotes included
    String,
    /// CSS property name before `:`
    Property,
    /// CSS value before `;`
    Value,
    /// `=`, `:`, `;`, `{`, `}`
    Punctuation,
    Plain,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Tag => "tag",
            TokenKind::Attribute => "attribute",
            TokenKind::String => "string",
            TokenKind::Property => "property",
            TokenKind::Value => "value",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Plain => "plain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

static TAG_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^</?[\w-]+").expect("valid pattern"));
static TAG_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/?>").expect("valid pattern"));
static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w-]+=").expect("valid pattern"));
static STRING: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^"[^"]*""#).expect("valid pattern"));
static PROPERTY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w-]+:").expect("valid pattern"));
// Leading indentation only; spaces after a property belong to its value
static INDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]+").expect("valid pattern"));
static VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^;{}<>]+;").expect("valid pattern"));

/// Tokenize every line of `code`. An empty line yields an empty token list.
pub fn highlight(code: &str) -> Vec<Vec<Token<'_>>> {
    code.split('\n').map(highlight_line).collect()
}

pub fn highlight_line(line: &str) -> Vec<Token<'_>> {
    let mut spans: Vec<(TokenKind, Range<usize>)> = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];
        let matched = move |pattern: &Lazy<Regex>| pattern.find(rest).map(|m| pos + m.end());

        pos = if let Some(end) = matched(&TAG_OPEN).or_else(|| matched(&TAG_CLOSE)) {
            push(&mut spans, TokenKind::Tag, pos..end);
            end
        } else if let Some(end) = matched(&ATTRIBUTE) {
            push(&mut spans, TokenKind::Attribute, pos..end - 1);
            push(&mut spans, TokenKind::Punctuation, end - 1..end);
            end
        } else if let Some(end) = matched(&STRING) {
            push(&mut spans, TokenKind::String, pos..end);
            end
        } else if let Some(end) = matched(&PROPERTY) {
            push(&mut spans, TokenKind::Property, pos..end - 1);
            push(&mut spans, TokenKind::Punctuation, end - 1..end);
            end
        } else if let Some(end) = matched(&INDENT).filter(|_| pos == 0) {
            push(&mut spans, TokenKind::Plain, pos..end);
            end
        } else if let Some(end) = matched(&VALUE) {
            push(&mut spans, TokenKind::Value, pos..end - 1);
            push(&mut spans, TokenKind::Punctuation, end - 1..end);
            end
        } else if rest.starts_with(|c: char| c == '{' || c == '}') {
            push(&mut spans, TokenKind::Punctuation, pos..pos + 1);
            pos + 1
        } else {
            let width = rest.chars().next().map_or(1, char::len_utf8);
            push(&mut spans, TokenKind::Plain, pos..pos + width);
            pos + width
        };
    }

    spans
        .into_iter()
        .map(|(kind, range)| Token {
            kind,
            text: &line[range],
        })
        .collect()
}

/// Append a span, merging runs of plain text into one
fn push(spans: &mut Vec<(TokenKind, Range<usize>)>, kind: TokenKind, range: Range<usize>) {
    if kind == TokenKind::Plain {
        if let Some((TokenKind::Plain, last)) = spans.last_mut() {
            if last.end == range.start {
                last.end = range.end;
                return;
            }
        }
    }
    spans.push((kind, range));
}

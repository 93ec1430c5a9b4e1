//! Punctuation and blank-line based segmentation shared by every assessment.
//!
//! Deliberately naive: no abbreviation handling, no language awareness.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence break pattern should compile"));

static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(#{1,4})[ \t]+([^\r\n]*\S)").expect("heading pattern should compile")
});

pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: usize,
    pub text: &'a str,
}

pub fn sentences(content: &str) -> Vec<&str> {
    SENTENCE_BREAK_RE
        .split(content)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

pub fn paragraphs(content: &str) -> Vec<&str> {
    content
        .split(PARAGRAPH_SEPARATOR)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Markdown ATX headings of level 1 to 4, in document order.
pub fn headings(content: &str) -> Vec<Heading<'_>> {
    HEADING_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let level = caps.get(1)?.as_str().len();
            let text = caps.get(2)?.as_str().trim();
            Some(Heading { level, text })
        })
        .collect()
}

/// The first `limit` words re-joined with single spaces.
pub fn leading_words(content: &str, limit: usize) -> String {
    content
        .split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}

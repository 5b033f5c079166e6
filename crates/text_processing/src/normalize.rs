//! Input normalization
//!
//! Turns pasted text into a line sequence the extractors can rely on:
//! - `\r\n` and lone `\r` become `\n`
//! - every line is trimmed
//! - a run of blank lines collapses to one stanza break
//! - blank lines at the start and end are dropped

use serde::Serialize;

/// Normalized, read-only view of one input text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedText {
    /// Non-empty trimmed lines in input order
    lines: Vec<String>,
    /// A blank line separated two blocks of text
    has_stanza_breaks: bool,
    /// Lines joined by `\n`, one empty line per stanza break
    source: String,
}

impl NormalizedText {
    /// Non-empty lines, in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn has_stanza_breaks(&self) -> bool {
        self.has_stanza_breaks
    }

    /// Canonical text; feeding it back to [`normalize`] yields the same value
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Lowercased canonical text for substring scoring
    pub fn lowercase(&self) -> String {
        self.source.to_lowercase()
    }
}

/// Normalize raw input text. Never fails; empty input gives an empty result.
pub fn normalize(raw: &str) -> NormalizedText {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");

    // Empty entries mark stanza breaks
    let mut segments: Vec<&str> = Vec::new();
    for line in unified.split('\n') {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            segments.push(trimmed);
        } else if matches!(segments.last(), Some(last) if !last.is_empty()) {
            segments.push("");
        }
    }
    while segments.last() == Some(&"") {
        segments.pop();
    }

    let has_stanza_breaks = segments.iter().any(|s| s.is_empty());
    let lines = segments
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    NormalizedText {
        lines,
        has_stanza_breaks,
        source: segments.join("\n"),
    }
}

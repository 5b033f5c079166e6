//! Synthesis markup
//!
//! Rewrites normalized text into the single string sent to the speech
//! backend. The backend reads `♪` as musical emphasis and `...`/`,` as
//! pauses, so the token strings below are a wire format.

use std::collections::HashMap;

use verse_voice_core::{ContentCategory, MusicStyle};

use crate::classifier::Classification;
use crate::normalize::NormalizedText;

/// Markup tokens understood by the backend
pub mod tokens {
    pub const NOTE: &str = "♪";
    pub const DOUBLE_NOTE: &str = "♪♪";
    pub const LONG_PAUSE: &str = "...";
    pub const SHORT_PAUSE: &str = ",";

    /// Verse into refrain
    pub const PRE_CHORUS: &str = "... ♪ ...";
    /// Refrain into verse
    pub const POST_CHORUS: &str = "♪ ... ♪";
    /// After every fourth line
    pub const VERSE_BREAK: &str = "♪ ...";

    pub const MUSIC: &str = "[music]";
    pub const SOFT_MUSIC: &str = "[soft music]";
}

/// Lines per verse group for break placement
const VERSE_LINES: usize = 4;

/// Rewrite a text for its classified category
pub fn transform(text: &NormalizedText, classification: &Classification) -> String {
    match classification.category {
        ContentCategory::Song => song_markup(text.lines()),
        ContentCategory::Poem => poem_markup(text.lines(), text.has_stanza_breaks()),
        ContentCategory::Narrative | ContentCategory::Generic => text.lines().join(" "),
    }
}

/// Wrap refrains in notes and place musical pauses between lines
///
/// Refrains here are counted case-sensitively, unlike the classifier's
/// case-folded count.
pub fn song_markup(lines: &[String]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for line in lines {
        *counts.entry(line.as_str()).or_insert(0) += 1;
    }
    let is_refrain = |line: &str| counts.get(line).copied().unwrap_or(0) > 1;

    let mut parts: Vec<String> = Vec::with_capacity(lines.len() * 2);
    for (i, line) in lines.iter().enumerate() {
        let refrain = is_refrain(line);
        if refrain {
            parts.push(format!("{} {} {}", tokens::NOTE, line, tokens::NOTE));
        } else {
            parts.push(line.clone());
        }

        let Some(next) = lines.get(i + 1) else {
            break;
        };
        let next_refrain = is_refrain(next);
        let separator = if next_refrain && !refrain {
            tokens::PRE_CHORUS
        } else if refrain && !next_refrain {
            tokens::POST_CHORUS
        } else if (i + 1) % VERSE_LINES == 0 {
            tokens::VERSE_BREAK
        } else {
            tokens::NOTE
        };
        parts.push(separator.to_string());
    }

    parts.join(" ")
}

/// Lines with contemplative pauses between them
///
/// With any stanza break in the text every separator is a long pause.
pub fn poem_markup(lines: &[String], has_stanza_breaks: bool) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(lines.len() * 2);
    for (i, line) in lines.iter().enumerate() {
        parts.push(line);
        if i + 1 < lines.len() {
            if has_stanza_breaks || (i + 1) % VERSE_LINES == 0 {
                parts.push(tokens::LONG_PAUSE);
            } else {
                parts.push(tokens::SHORT_PAUSE);
            }
        }
    }
    parts.join(" ")
}

/// Add musical accompaniment markers in the requested style
///
/// Returns the text unchanged when music is not requested.
pub fn apply_music_style(text: &str, include_music: bool, style: MusicStyle) -> String {
    if !include_music {
        return text.to_string();
    }

    let text = text.trim();
    let lines = || text.lines().map(str::trim).filter(|line| !line.is_empty());

    match style {
        MusicStyle::Background => format!("{} {}", tokens::MUSIC, text),
        MusicStyle::Calm => format!("{} {}", tokens::SOFT_MUSIC, text),
        MusicStyle::Melody => lines()
            .enumerate()
            .map(|(i, line)| {
                let note = if i % 2 == 0 { tokens::NOTE } else { tokens::DOUBLE_NOTE };
                format!("{} {} {}", note, line, note)
            })
            .collect::<Vec<_>>()
            .join(&format!(" {} ", tokens::LONG_PAUSE)),
        MusicStyle::Upbeat => lines()
            .map(|line| {
                format!(
                    "{} {} {} {} {}",
                    tokens::DOUBLE_NOTE,
                    tokens::MUSIC,
                    line,
                    tokens::MUSIC,
                    tokens::DOUBLE_NOTE
                )
            })
            .collect::<Vec<_>>()
            .join(&format!(" {} ", tokens::NOTE)),
    }
}

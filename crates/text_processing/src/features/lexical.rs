//! Vocabulary hit counting
//!
//! All matching is case-insensitive substring search, so "sol" also hits
//! "soledad". That looseness is part of the tuned behavior.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use verse_voice_config::{FeatureLimits, VocabularyConfig};

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w]").unwrap());

/// Hit counts per vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LexicalScores {
    pub direct_musical: usize,
    pub exclusive_musical: usize,
    pub ambiguous_musical: usize,
    /// Lines containing at least one interjection
    pub interjection_lines: usize,
    pub poetic: usize,
    pub narrative_markers: usize,
    /// Narrative markers plus narrative context words
    pub narrative_penalty_hits: usize,
    pub strong_song_cues: usize,
}

/// Number of vocabulary entries found in `text_lower`
///
/// Each entry counts at most once. Blank entries never match.
pub fn count_hits(text_lower: &str, vocabulary: &[String]) -> usize {
    vocabulary
        .iter()
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty() && text_lower.contains(entry.as_str()))
        .count()
}

/// Number of lines containing at least one interjection
pub fn interjection_lines(lines: &[String], interjections: &[String]) -> usize {
    let tokens: Vec<String> = interjections
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    lines
        .iter()
        .filter(|line| {
            let lower = line.to_lowercase();
            tokens.iter().any(|t| lower.contains(t.as_str()))
        })
        .count()
}

/// Score every vocabulary against one text
pub fn score_vocabulary(
    text_lower: &str,
    lines: &[String],
    vocabulary: &VocabularyConfig,
) -> LexicalScores {
    let narrative_markers = count_hits(text_lower, &vocabulary.narrative_markers);
    let narrative_context = count_hits(text_lower, &vocabulary.narrative_context);

    LexicalScores {
        direct_musical: count_hits(text_lower, &vocabulary.direct_musical),
        exclusive_musical: count_hits(text_lower, &vocabulary.exclusive_musical),
        ambiguous_musical: count_hits(text_lower, &vocabulary.ambiguous_musical),
        interjection_lines: interjection_lines(lines, &vocabulary.interjections),
        poetic: count_hits(text_lower, &vocabulary.poetic),
        narrative_markers,
        narrative_penalty_hits: narrative_markers + narrative_context,
        strong_song_cues: count_hits(text_lower, &vocabulary.strong_song_cues),
    }
}

/// Count distinct significant words occurring at least `min_repeats` times
///
/// A word is significant when it keeps at least `significant_word_min_chars`
/// characters after stripping punctuation and is not a stopword.
pub fn repeated_significant_words(
    text_lower: &str,
    stopwords: &[String],
    limits: &FeatureLimits,
) -> usize {
    let stopwords: HashSet<&str> = stopwords.iter().map(|w| w.as_str()).collect();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for word in text_lower.split_whitespace() {
        let clean = NON_WORD.replace_all(word, "");
        if clean.chars().count() >= limits.significant_word_min_chars
            && !stopwords.contains(&*clean)
        {
            *counts.entry(clean.into_owned()).or_insert(0) += 1;
        }
    }

    counts
        .values()
        .filter(|&&n| n >= limits.significant_word_min_repeats)
        .count()
}

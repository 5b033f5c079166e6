//! Rhyme ending detection
//!
//! A line's ending is the tail of its last word after lowercasing and
//! dropping every non-word character. Two lines rhyme when their endings are
//! identical.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use verse_voice_config::FeatureLimits;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w]").unwrap());

/// Rhyme statistics for a text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RhymeAnalysis {
    /// Unordered pairs of lines sharing an ending
    pub pair_count: usize,
    /// At least one rhyming pair
    pub has_rhyme_pattern: bool,
    /// Pairs counted over full-length endings only (diagnostic)
    pub strong_pair_count: usize,
    /// Strong pairs reach the configured minimum (diagnostic)
    pub has_strong_rhyme: bool,
}

/// Lowercased last word with non-word characters removed
pub fn clean_last_word(line: &str) -> Option<String> {
    let last = line.split_whitespace().last()?;
    Some(NON_WORD.replace_all(&last.to_lowercase(), "").into_owned())
}

/// Rhyme ending of a line, if its last word is long enough
///
/// Words at least `rhyme_ending_chars` long contribute their tail of that
/// length; shorter words down to `rhyme_min_word_chars` contribute whole.
pub fn line_ending(line: &str, limits: &FeatureLimits) -> Option<String> {
    let word = clean_last_word(line)?;
    let chars: Vec<char> = word.chars().collect();

    if chars.len() >= limits.rhyme_ending_chars {
        Some(chars[chars.len() - limits.rhyme_ending_chars..].iter().collect())
    } else if chars.len() >= limits.rhyme_min_word_chars {
        Some(word)
    } else {
        None
    }
}

/// Number of unordered pairs with identical endings
pub fn count_pairs<S: AsRef<str>>(endings: &[S]) -> usize {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for ending in endings {
        *counts.entry(ending.as_ref()).or_insert(0) += 1;
    }
    counts.values().map(|&n| n * (n - 1) / 2).sum()
}

/// Analyze rhyme endings across all lines
pub fn analyze_rhymes(lines: &[String], limits: &FeatureLimits) -> RhymeAnalysis {
    if lines.len() < 2 {
        return RhymeAnalysis::default();
    }

    let endings: Vec<String> = lines
        .iter()
        .filter_map(|line| line_ending(line, limits))
        .collect();
    let pair_count = count_pairs(&endings);

    let full_endings: Vec<&String> = endings
        .iter()
        .filter(|e| e.chars().count() >= limits.rhyme_ending_chars)
        .collect();
    let strong_pair_count = if full_endings.len() < 2 {
        0
    } else {
        count_pairs(&full_endings)
    };

    RhymeAnalysis {
        pair_count,
        has_rhyme_pattern: pair_count >= 1,
        strong_pair_count,
        has_strong_rhyme: strong_pair_count >= limits.strong_rhyme_min_pairs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_line_ending() {
        let limits = FeatureLimits::default();
        assert_eq!(line_ending("Late fuerte el corazón", &limits), Some("zón".to_string()));
        assert_eq!(line_ending("mi canción!", &limits), Some("ión".to_string()));
        assert_eq!(line_ending("dime tú", &limits), Some("tú".to_string()));
        assert_eq!(line_ending("y a", &limits), None);
        assert_eq!(line_ending("", &limits), None);
        assert_eq!(line_ending("...", &limits), None);
    }

    #[test]
    fn test_count_pairs() {
        assert_eq!(count_pairs(&["ón", "ón", "ón"]), 3);
        assert_eq!(count_pairs(&["ar", "or", "ar", "or"]), 2);
        assert_eq!(count_pairs::<&str>(&[]), 0);
    }

    #[test]
    fn test_analyze_rhymes() {
        let limits = FeatureLimits::default();
        let poem = lines(&[
            "En el jardín de mis sueños",
            "Florece la esperanza eterna",
            "Donde el alma encuentra paz",
            "Y la vida se hace tierna",
        ]);
        let result = analyze_rhymes(&poem, &limits);
        assert_eq!(result.pair_count, 1);
        assert!(result.has_rhyme_pattern);
        assert!(!result.has_strong_rhyme);
    }

    #[test]
    fn test_strong_rhyme_ignores_short_endings() {
        let limits = FeatureLimits::default();
        let text = lines(&["voy a ti", "pienso en ti", "cantar", "bailar", "soñar"]);
        let result = analyze_rhymes(&text, &limits);
        // only the two-letter "ti" endings match
        assert_eq!(result.pair_count, 1);
        assert_eq!(result.strong_pair_count, 0);
    }

    #[test]
    fn test_single_line_has_no_rhyme() {
        let limits = FeatureLimits::default();
        assert_eq!(analyze_rhymes(&lines(&["amor amor"]), &limits), RhymeAnalysis::default());
    }

    #[test]
    fn test_adding_matching_line_never_decreases_pairs() {
        let limits = FeatureLimits::default();
        let mut text = lines(&["la noche es larga", "mi amor se marcha", "la luna se esconde"]);
        let before = analyze_rhymes(&text, &limits).pair_count;
        text.push("y el viento me embarga".to_string());
        let after = analyze_rhymes(&text, &limits).pair_count;
        assert!(after >= before);
        assert_eq!(after, before + 1);
    }
}

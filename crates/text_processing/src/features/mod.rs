//! Feature extraction
//!
//! Each extractor is a pure function over the normalized lines and the
//! analysis tables. `extract_features` runs them all once per request and
//! bundles the results for the classifier.

mod lexical;
mod repetition;
mod rhyme;
mod shape;

pub use lexical::{
    count_hits, interjection_lines, repeated_significant_words, score_vocabulary, LexicalScores,
};
pub use repetition::{
    analyze_repetition, detect_song_structure, detect_verse_chorus, refrain_map,
    RefrainMap, RepetitionAnalysis,
};
pub use rhyme::{analyze_rhymes, clean_last_word, count_pairs, line_ending, RhymeAnalysis};
pub use shape::{analyze_shape, ShapeStats};

use serde::Serialize;
use verse_voice_config::AnalysisConfig;

use crate::normalize::NormalizedText;

/// Every signal the classifier reads, plus diagnostics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineFeatures {
    pub line_count: usize,
    pub has_stanza_breaks: bool,
    pub rhyme: RhymeAnalysis,
    /// Distinct repeated lines
    pub refrain_count: usize,
    /// A chorus line recurs at a verse-sized gap
    pub has_periodicity: bool,
    pub lexical: LexicalScores,
    pub shape: ShapeStats,
    /// ABAB/AABA groups found (diagnostic)
    pub has_song_structure: bool,
    /// Significant words repeated often (diagnostic)
    pub repeated_words: usize,
}

/// Run all extractors over a normalized text
pub fn extract_features(text: &NormalizedText, config: &AnalysisConfig) -> LineFeatures {
    let lines = text.lines();
    let lower = text.lowercase();
    let limits = &config.features;

    LineFeatures {
        line_count: text.line_count(),
        has_stanza_breaks: text.has_stanza_breaks(),
        rhyme: analyze_rhymes(lines, limits),
        refrain_count: analyze_repetition(lines, limits).refrain_count,
        has_periodicity: detect_verse_chorus(lines, limits),
        lexical: score_vocabulary(&lower, lines, &config.vocabulary),
        shape: analyze_shape(lines, limits, &config.poem),
        has_song_structure: detect_song_structure(lines),
        repeated_words: repeated_significant_words(&lower, &config.vocabulary.stopwords, limits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn test_extract_song_features() {
        let config = AnalysisConfig::default();
        let text = normalize(
            "Bajo la luz de la luna\nCantando nuestra canción\nBajo la luz de la luna\nLa la la la la",
        );
        let features = extract_features(&text, &config);

        assert_eq!(features.line_count, 4);
        assert_eq!(features.refrain_count, 1);
        assert!(features.lexical.direct_musical >= 2);
        assert!(features.has_song_structure);
        assert!(!features.has_periodicity);
    }

    #[test]
    fn test_extract_empty() {
        let features = extract_features(&normalize(""), &AnalysisConfig::default());
        assert_eq!(features.line_count, 0);
        assert_eq!(features.refrain_count, 0);
        assert!(!features.rhyme.has_rhyme_pattern);
    }
}

//! Centralized constants for the text pipeline
//!
//! Single source of truth for the default weights, thresholds and limits used
//! by the classifier and feature extractors. The values were tuned by hand
//! against sample songs, poems and stories; `AnalysisConfig` starts from
//! these and lets deployments override any of them.

/// Song score weights and thresholds
pub mod song {
    /// Any direct musical word (genre, instrument, "la la la")
    pub const DIRECT_VOCABULARY_WEIGHT: i32 = 5;

    /// Several lines carrying musical interjections
    pub const INTERJECTION_WEIGHT: i32 = 3;
    pub const MIN_INTERJECTION_LINES: usize = 2;

    /// At least one repeated line
    pub const REFRAIN_WEIGHT: i32 = 4;

    /// Verse/chorus periodicity detected
    pub const PERIODICITY_WEIGHT: i32 = 3;

    /// Dance/rhythm/composition vocabulary
    pub const EXCLUSIVE_VOCABULARY_WEIGHT: i32 = 2;

    /// Several short, rhythmic lines
    pub const SHORT_LINE_WEIGHT: i32 = 1;
    pub const MIN_SHORT_LINES: usize = 2;

    /// Subtracted when the text reads like a story
    pub const NARRATIVE_PENALTY: i32 = 3;
    pub const NARRATIVE_PENALTY_MIN_HITS: usize = 2;

    /// Ambiguous words only count once the score reaches this gate
    pub const AMBIGUOUS_GATE: i32 = 2;
    pub const AMBIGUOUS_MAX_BONUS: i32 = 1;

    /// Minimum score to classify as a song
    pub const SCORE_THRESHOLD: i32 = 5;
    pub const MIN_LINES: usize = 2;
}

/// Poem indicator weights and thresholds
pub mod poem {
    /// Max distance (chars) from the average line length
    pub const SIMILAR_LENGTH_BAND: f64 = 20.0;
    /// Fraction of lines that must fall inside the band (exclusive)
    pub const SIMILAR_LENGTH_RATIO: f64 = 0.6;
    pub const SIMILAR_LENGTH_WEIGHT: i32 = 1;

    /// Rhyme counts double
    pub const RHYME_WEIGHT: i32 = 2;

    pub const POETIC_MIN_HITS: usize = 2;
    pub const POETIC_WEIGHT: i32 = 1;

    pub const STANZA_WEIGHT: i32 = 1;

    /// Fraction of medium-length lines (exclusive)
    pub const MEDIUM_LINE_RATIO: f64 = 0.5;
    pub const MEDIUM_LINE_WEIGHT: i32 = 1;

    /// Minimum indicator count to classify as a poem
    pub const INDICATOR_THRESHOLD: i32 = 2;
    pub const MIN_LINES: usize = 2;
}

/// Feature extractor limits
pub mod features {
    /// Lines shorter than this never count as refrains
    pub const REFRAIN_MIN_CHARS: usize = 4;

    /// Periodicity needs this many lines
    pub const PERIODICITY_MIN_LINES: usize = 6;
    /// Lines shorter than this are ignored by periodicity detection
    pub const PERIODICITY_MIN_CHARS: usize = 6;
    /// Chorus gap range, inclusive
    pub const CHORUS_GAP_MIN: usize = 3;
    pub const CHORUS_GAP_MAX: usize = 8;

    /// Rhyme ending length
    pub const RHYME_ENDING_CHARS: usize = 3;
    pub const RHYME_MIN_WORD_CHARS: usize = 2;
    /// Pair count that makes a rhyme pattern "strong"
    pub const STRONG_RHYME_MIN_PAIRS: usize = 2;

    /// Word-count range for medium (poem-like) lines, inclusive
    pub const MEDIUM_WORDS_MIN: usize = 6;
    pub const MEDIUM_WORDS_MAX: usize = 12;

    /// Word-count range for short rhythmic (song-like) lines, inclusive
    pub const SHORT_WORDS_MIN: usize = 2;
    pub const SHORT_WORDS_MAX: usize = 5;

    /// Significant-word repetition diagnostics
    pub const SIGNIFICANT_WORD_MIN_CHARS: usize = 4;
    pub const SIGNIFICANT_WORD_MIN_REPEATS: usize = 3;
}

/// Segmentation advice by line count
pub mod segmentation {
    /// More lines than this: split by stanzas
    pub const STANZA_SPLIT_ABOVE: usize = 8;
    /// More lines than this: split by lines
    pub const LINE_SPLIT_ABOVE: usize = 4;
}

/// Voice presets used for recommendations
pub mod voices {
    /// Neutral narrator (voice-A)
    pub const NARRATOR: &str = "v2/es_speaker_0";
    /// Singer (voice-B)
    pub const SINGER: &str = "v2/es_speaker_1";
    /// Expressive reciter (voice-C)
    pub const RECITER: &str = "v2/es_speaker_2";
}

/// Synthesis call defaults
pub mod synthesis {
    /// Backend synthesis timeout (ms)
    pub const TIMEOUT_MS: u64 = 15_000;

    /// Output sample rate of the reference backend (Hz)
    pub const SAMPLE_RATE: u32 = 24_000;
}

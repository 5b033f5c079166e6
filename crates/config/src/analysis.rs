//! Text Analysis Configuration
//!
//! Vocabulary tables, signal weights and thresholds for the content
//! classifier. Every field has a default matching `constants`, so a config
//! file only needs the values it changes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{features, poem, segmentation, song, voices};
use crate::ConfigError;

/// Full analysis configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Word lists scanned by the lexical scorers
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    /// Song score weights
    #[serde(default)]
    pub song: SongRules,
    /// Poem indicator weights
    #[serde(default)]
    pub poem: PoemRules,
    /// Feature extractor limits
    #[serde(default)]
    pub features: FeatureLimits,
    /// Segmentation advice thresholds
    #[serde(default)]
    pub segmentation: SegmentationRules,
    /// Voice presets per category
    #[serde(default)]
    pub voices: VoiceSlots,
}

impl AnalysisConfig {
    /// Load from a YAML or TOML file (chosen by extension, YAML otherwise)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileNotFound {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let config: Self = if is_toml {
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded analysis config");
        Ok(config)
    }

    /// Reject configurations the classifier cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required_lists = [
            ("vocabulary.direct_musical", &self.vocabulary.direct_musical),
            ("vocabulary.narrative_markers", &self.vocabulary.narrative_markers),
        ];
        for (field, list) in required_lists {
            if list.iter().all(|w| w.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "Word list must not be empty".to_string(),
                });
            }
        }

        if self.song.score_threshold <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "song.score_threshold".to_string(),
                message: "Threshold must be positive".to_string(),
            });
        }
        if self.poem.indicator_threshold <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "poem.indicator_threshold".to_string(),
                message: "Threshold must be positive".to_string(),
            });
        }

        for (field, ratio) in [
            ("poem.similar_length_ratio", self.poem.similar_length_ratio),
            ("poem.medium_line_ratio", self.poem.medium_line_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("Ratio must be within 0.0-1.0, got {}", ratio),
                });
            }
        }

        let ranges = [
            (
                "features.chorus_gap",
                self.features.chorus_gap_min,
                self.features.chorus_gap_max,
            ),
            (
                "features.medium_words",
                self.features.medium_words_min,
                self.features.medium_words_max,
            ),
            (
                "features.short_words",
                self.features.short_words_min,
                self.features.short_words_max,
            ),
        ];
        for (field, min, max) in ranges {
            if min > max {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("Range minimum {} exceeds maximum {}", min, max),
                });
            }
        }

        if self.features.rhyme_min_word_chars == 0
            || self.features.rhyme_min_word_chars > self.features.rhyme_ending_chars
        {
            return Err(ConfigError::InvalidValue {
                field: "features.rhyme_min_word_chars".to_string(),
                message: "Must be between 1 and rhyme_ending_chars".to_string(),
            });
        }

        Ok(())
    }
}

/// Word lists for the lexical scorers
///
/// Matching is case-insensitive substring search over the whole text, so
/// multi-word phrases work and short entries also hit inside longer words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Genre, instrument and performance words plus sung syllables
    #[serde(default = "default_direct_musical")]
    pub direct_musical: Vec<String>,
    /// Dance, rhythm and composition words
    #[serde(default = "default_exclusive_musical")]
    pub exclusive_musical: Vec<String>,
    /// Words that also show up in stories about music
    #[serde(default = "default_ambiguous_musical")]
    pub ambiguous_musical: Vec<String>,
    /// Sung interjections, counted per line
    #[serde(default = "default_interjections")]
    pub interjections: Vec<String>,
    /// Abstract and emotive nouns
    #[serde(default = "default_poetic")]
    pub poetic: Vec<String>,
    /// Story openers and sequencing phrases
    #[serde(default = "default_narrative_markers")]
    pub narrative_markers: Vec<String>,
    /// Extra story words that only feed the song penalty
    #[serde(default = "default_narrative_context")]
    pub narrative_context: Vec<String>,
    /// Words that veto a poem classification
    #[serde(default = "default_strong_song_cues")]
    pub strong_song_cues: Vec<String>,
    /// Words ignored by significant-word repetition
    #[serde(default = "default_stopwords")]
    pub stopwords: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            direct_musical: default_direct_musical(),
            exclusive_musical: default_exclusive_musical(),
            ambiguous_musical: default_ambiguous_musical(),
            interjections: default_interjections(),
            poetic: default_poetic(),
            narrative_markers: default_narrative_markers(),
            narrative_context: default_narrative_context(),
            strong_song_cues: default_strong_song_cues(),
            stopwords: default_stopwords(),
        }
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn default_direct_musical() -> Vec<String> {
    words(&[
        "la la la", "tra la la", "na na na", "canción", "cantar", "cantando", "rock", "pop",
        "rap", "beat", "guitar", "piano", "dance", "swing", "blues", "jazz", "reggae", "salsa",
        "tango", "banda", "concierto",
    ])
}

fn default_exclusive_musical() -> Vec<String> {
    words(&[
        "bailar", "fiesta", "ritmo", "melodía", "coro", "estribillo", "verso", "compás",
        "acorde", "escenario",
    ])
}

fn default_ambiguous_musical() -> Vec<String> {
    words(&["música", "cantar", "cantaban"])
}

fn default_interjections() -> Vec<String> {
    words(&[
        "oh", "ah", "eh", "hey", "yeah", "sí", "no", "wow", "uoh", "mmm", "lalala", "nanana",
        "dadada", "bababa", "yay", "woah", "whoa",
    ])
}

fn default_poetic() -> Vec<String> {
    words(&[
        "corazón", "alma", "amor", "vida", "cielo", "sol", "luna", "estrella", "sueño",
        "esperanza", "milagro", "anhelo", "verdad", "eternidad", "jardín", "florece", "paz",
        "tierna", "suave", "sublime",
    ])
}

fn default_narrative_markers() -> Vec<String> {
    words(&[
        "había una vez", "érase una vez", "en un lugar", "entonces", "después", "finalmente",
        "al principio", "historia", "cuento",
    ])
}

fn default_narrative_context() -> Vec<String> {
    words(&["reino", "viajero", "llegó", "conocido por"])
}

fn default_strong_song_cues() -> Vec<String> {
    words(&[
        "la la la", "tra la la", "na na na", "canción", "cantar", "cantando", "rock", "pop",
        "rap", "beat", "bailar", "dance",
    ])
}

fn default_stopwords() -> Vec<String> {
    words(&[
        "el", "la", "de", "que", "y", "en", "un", "es", "se", "no", "te", "lo", "le", "da", "su",
        "por", "son", "con", "para", "una", "del", "los", "las", "al", "mi", "tu",
    ])
}

/// Song score weights and thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongRules {
    pub direct_vocabulary_weight: i32,
    pub interjection_weight: i32,
    pub min_interjection_lines: usize,
    pub refrain_weight: i32,
    pub periodicity_weight: i32,
    pub exclusive_vocabulary_weight: i32,
    pub short_line_weight: i32,
    pub min_short_lines: usize,
    pub narrative_penalty: i32,
    pub narrative_penalty_min_hits: usize,
    pub ambiguous_gate: i32,
    pub ambiguous_max_bonus: i32,
    pub score_threshold: i32,
    pub min_lines: usize,
}

impl Default for SongRules {
    fn default() -> Self {
        Self {
            direct_vocabulary_weight: song::DIRECT_VOCABULARY_WEIGHT,
            interjection_weight: song::INTERJECTION_WEIGHT,
            min_interjection_lines: song::MIN_INTERJECTION_LINES,
            refrain_weight: song::REFRAIN_WEIGHT,
            periodicity_weight: song::PERIODICITY_WEIGHT,
            exclusive_vocabulary_weight: song::EXCLUSIVE_VOCABULARY_WEIGHT,
            short_line_weight: song::SHORT_LINE_WEIGHT,
            min_short_lines: song::MIN_SHORT_LINES,
            narrative_penalty: song::NARRATIVE_PENALTY,
            narrative_penalty_min_hits: song::NARRATIVE_PENALTY_MIN_HITS,
            ambiguous_gate: song::AMBIGUOUS_GATE,
            ambiguous_max_bonus: song::AMBIGUOUS_MAX_BONUS,
            score_threshold: song::SCORE_THRESHOLD,
            min_lines: song::MIN_LINES,
        }
    }
}

/// Poem indicator weights and thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoemRules {
    pub similar_length_band: f64,
    pub similar_length_ratio: f64,
    pub similar_length_weight: i32,
    pub rhyme_weight: i32,
    pub poetic_min_hits: usize,
    pub poetic_weight: i32,
    pub stanza_weight: i32,
    pub medium_line_ratio: f64,
    pub medium_line_weight: i32,
    pub indicator_threshold: i32,
    pub min_lines: usize,
}

impl Default for PoemRules {
    fn default() -> Self {
        Self {
            similar_length_band: poem::SIMILAR_LENGTH_BAND,
            similar_length_ratio: poem::SIMILAR_LENGTH_RATIO,
            similar_length_weight: poem::SIMILAR_LENGTH_WEIGHT,
            rhyme_weight: poem::RHYME_WEIGHT,
            poetic_min_hits: poem::POETIC_MIN_HITS,
            poetic_weight: poem::POETIC_WEIGHT,
            stanza_weight: poem::STANZA_WEIGHT,
            medium_line_ratio: poem::MEDIUM_LINE_RATIO,
            medium_line_weight: poem::MEDIUM_LINE_WEIGHT,
            indicator_threshold: poem::INDICATOR_THRESHOLD,
            min_lines: poem::MIN_LINES,
        }
    }
}

/// Limits used by the feature extractors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureLimits {
    pub refrain_min_chars: usize,
    pub periodicity_min_lines: usize,
    pub periodicity_min_chars: usize,
    pub chorus_gap_min: usize,
    pub chorus_gap_max: usize,
    pub rhyme_ending_chars: usize,
    pub rhyme_min_word_chars: usize,
    pub strong_rhyme_min_pairs: usize,
    pub medium_words_min: usize,
    pub medium_words_max: usize,
    pub short_words_min: usize,
    pub short_words_max: usize,
    pub significant_word_min_chars: usize,
    pub significant_word_min_repeats: usize,
}

impl Default for FeatureLimits {
    fn default() -> Self {
        Self {
            refrain_min_chars: features::REFRAIN_MIN_CHARS,
            periodicity_min_lines: features::PERIODICITY_MIN_LINES,
            periodicity_min_chars: features::PERIODICITY_MIN_CHARS,
            chorus_gap_min: features::CHORUS_GAP_MIN,
            chorus_gap_max: features::CHORUS_GAP_MAX,
            rhyme_ending_chars: features::RHYME_ENDING_CHARS,
            rhyme_min_word_chars: features::RHYME_MIN_WORD_CHARS,
            strong_rhyme_min_pairs: features::STRONG_RHYME_MIN_PAIRS,
            medium_words_min: features::MEDIUM_WORDS_MIN,
            medium_words_max: features::MEDIUM_WORDS_MAX,
            short_words_min: features::SHORT_WORDS_MIN,
            short_words_max: features::SHORT_WORDS_MAX,
            significant_word_min_chars: features::SIGNIFICANT_WORD_MIN_CHARS,
            significant_word_min_repeats: features::SIGNIFICANT_WORD_MIN_REPEATS,
        }
    }
}

/// Segmentation advice thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationRules {
    pub stanza_split_above: usize,
    pub line_split_above: usize,
}

impl Default for SegmentationRules {
    fn default() -> Self {
        Self {
            stanza_split_above: segmentation::STANZA_SPLIT_ABOVE,
            line_split_above: segmentation::LINE_SPLIT_ABOVE,
        }
    }
}

/// Voice presets recommended per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSlots {
    /// Narrative and generic text
    pub narrator: String,
    /// Songs
    pub singer: String,
    /// Poems
    pub reciter: String,
}

impl Default for VoiceSlots {
    fn default() -> Self {
        Self {
            narrator: voices::NARRATOR.to_string(),
            singer: voices::SINGER.to_string(),
            reciter: voices::RECITER.to_string(),
        }
    }
}

//! Line-shape statistics

use serde::Serialize;
use verse_voice_config::{FeatureLimits, PoemRules};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShapeStats {
    /// Mean line length in characters
    pub avg_line_length: f64,
    /// Fraction of lines within the similar-length band of the mean
    pub similar_length_ratio: f64,
    /// Fraction of lines with a medium word count
    pub medium_line_ratio: f64,
    /// Lines with a short word count
    pub short_line_count: usize,
    pub short_line_ratio: f64,
}

pub fn analyze_shape(lines: &[String], limits: &FeatureLimits, poem: &PoemRules) -> ShapeStats {
    if lines.is_empty() {
        return ShapeStats::default();
    }

    let total = lines.len() as f64;
    let lengths: Vec<f64> = lines.iter().map(|l| l.chars().count() as f64).collect();
    let avg_line_length = lengths.iter().sum::<f64>() / total;

    let similar = lengths
        .iter()
        .filter(|&&len| (len - avg_line_length).abs() < poem.similar_length_band)
        .count();

    let word_counts: Vec<usize> = lines.iter().map(|l| l.split_whitespace().count()).collect();
    let medium = word_counts
        .iter()
        .filter(|&&n| (limits.medium_words_min..=limits.medium_words_max).contains(&n))
        .count();
    let short_line_count = word_counts
        .iter()
        .filter(|&&n| (limits.short_words_min..=limits.short_words_max).contains(&n))
        .count();

    ShapeStats {
        avg_line_length,
        similar_length_ratio: similar as f64 / total,
        medium_line_ratio: medium as f64 / total,
        short_line_count,
        short_line_ratio: short_line_count as f64 / total,
    }
}

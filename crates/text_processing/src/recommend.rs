//! Synthesis recommendations per content category

use serde::{Deserialize, Serialize};
use verse_voice_config::{AnalysisConfig, SegmentationRules};
use verse_voice_core::{ContentCategory, MusicStyle, ProcessingStrategy, SegmentationStrategy};

use crate::classifier::Classification;

/// Suggested synthesis configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub voice: String,
    pub music_style: MusicStyle,
    pub include_music: bool,
    pub processing_strategy: ProcessingStrategy,
    pub segmentation_strategy: SegmentationStrategy,
}

/// Map a classification to its recommended configuration
pub fn recommend(classification: &Classification, config: &AnalysisConfig) -> Recommendation {
    let voices = &config.voices;
    let (voice, music_style) = match classification.category {
        ContentCategory::Song => (&voices.singer, MusicStyle::Melody),
        ContentCategory::Poem => (&voices.reciter, MusicStyle::Background),
        ContentCategory::Narrative => (&voices.narrator, MusicStyle::Calm),
        ContentCategory::Generic => (&voices.narrator, MusicStyle::Background),
    };

    Recommendation {
        voice: voice.clone(),
        music_style,
        include_music: classification.category.is_musical(),
        processing_strategy: classification.category.into(),
        segmentation_strategy: segmentation_for(classification.line_count, &config.segmentation),
    }
}

/// Segmentation hint by line count
pub fn segmentation_for(line_count: usize, rules: &SegmentationRules) -> SegmentationStrategy {
    if line_count > rules.stanza_split_above {
        SegmentationStrategy::SplitByStanzas
    } else if line_count > rules.line_split_above {
        SegmentationStrategy::SplitByLines
    } else {
        SegmentationStrategy::KeepTogether
    }
}

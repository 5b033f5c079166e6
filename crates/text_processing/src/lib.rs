//! Text characterization and synthesis markup
//!
//! Features:
//! - Input normalization and payload extraction
//! - Rhyme, repetition, lexical and line-shape feature extraction
//! - Rule-based classification (song, poem, narrative, generic text)
//! - Voice and music recommendations
//! - Category-specific synthesis markup and music-style prefixes

pub mod classifier;
pub mod features;
pub mod input;
pub mod markup;
pub mod normalize;
pub mod pipeline;
pub mod recommend;

pub use classifier::{classify, Classification, ClassificationRule, RuleVerdict, DECISION_TABLE};
pub use features::{extract_features, LineFeatures};
pub use input::{extract_text, try_extract_text};
pub use markup::{apply_music_style, transform};
pub use normalize::{normalize, NormalizedText};
pub use pipeline::{
    Analysis, Diagnostics, ProcessedText, SynthesisOptions, SynthesisPlan, TextPipeline,
};
pub use recommend::{recommend, segmentation_for, Recommendation};

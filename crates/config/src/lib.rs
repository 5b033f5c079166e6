//! Configuration management for the verse voice pipeline
//!
//! Provides:
//! - Tunable analysis tables (vocabularies, weights, thresholds)
//! - Centralized default constants
//! - Layered settings loading (files + environment)

pub mod analysis;
pub mod constants;
pub mod error;
pub mod settings;

pub use analysis::{
    AnalysisConfig, FeatureLimits, PoemRules, SegmentationRules, SongRules, VocabularyConfig,
    VoiceSlots,
};
pub use error::ConfigError;
pub use settings::{load_settings, ObservabilityConfig, Settings, SynthesisSettings};

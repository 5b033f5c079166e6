//! Text pipeline entry points
//!
//! normalize -> extract features -> classify -> {recommend, transform}
//!
//! [`TextPipeline`] holds only an immutable, shared [`AnalysisConfig`], so a
//! single instance can serve concurrent requests without locking.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use verse_voice_config::AnalysisConfig;
use verse_voice_core::{ContentCategory, Error, MusicStyle, Result};

use crate::classifier::classify;
use crate::features::{extract_features, LineFeatures};
use crate::markup::{apply_music_style, transform};
use crate::normalize::{normalize, NormalizedText};
use crate::recommend::{recommend, Recommendation};

static DEFAULT_CONFIG: Lazy<Arc<AnalysisConfig>> =
    Lazy::new(|| Arc::new(AnalysisConfig::default()));

/// Classifier diagnostics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    pub score: i32,
    pub notes: Vec<String>,
    pub has_rhyme_pattern: bool,
    pub line_count: usize,
    pub is_multiline: bool,
    pub avg_line_length: f64,
    pub features: LineFeatures,
}

/// Result of [`TextPipeline::analyze`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub category: ContentCategory,
    pub diagnostics: Diagnostics,
    pub recommendation: Recommendation,
}

/// Result of [`TextPipeline::process`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedText {
    #[serde(flatten)]
    pub analysis: Analysis,
    /// Text rewritten with pause and emphasis markup
    pub synthesis_text: String,
}

/// Caller overrides for [`TextPipeline::plan`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisOptions {
    pub voice: Option<String>,
    pub include_music: Option<bool>,
    pub music_style: Option<MusicStyle>,
}

/// Everything a caller needs for one backend call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisPlan {
    pub voice: String,
    /// Final text for the backend
    pub text: String,
    pub include_music: bool,
    pub music_style: MusicStyle,
    pub processed: ProcessedText,
}

/// Rule-based text characterization pipeline
#[derive(Debug, Clone)]
pub struct TextPipeline {
    config: Arc<AnalysisConfig>,
}

impl Default for TextPipeline {
    fn default() -> Self {
        Self {
            config: DEFAULT_CONFIG.clone(),
        }
    }
}

impl TextPipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn with_shared_config(config: Arc<AnalysisConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Classify a text and recommend synthesis settings
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        let normalized = normalize_non_empty(text)?;
        Ok(self.run(&normalized).0)
    }

    /// Analyze and rewrite a text for synthesis
    pub fn process(&self, text: &str) -> Result<ProcessedText> {
        let normalized = normalize_non_empty(text)?;
        let (analysis, synthesis_text) = self.run(&normalized);
        Ok(ProcessedText {
            analysis,
            synthesis_text,
        })
    }

    /// Resolve the final backend request, applying caller overrides
    pub fn plan(&self, text: &str, options: &SynthesisOptions) -> Result<SynthesisPlan> {
        let processed = self.process(text)?;
        let recommendation = &processed.analysis.recommendation;

        let voice = options
            .voice
            .clone()
            .unwrap_or_else(|| recommendation.voice.clone());
        let include_music = options.include_music.unwrap_or(recommendation.include_music);
        let music_style = options.music_style.unwrap_or(recommendation.music_style);
        let text = apply_music_style(&processed.synthesis_text, include_music, music_style);

        tracing::debug!(
            voice = %voice,
            include_music,
            music_style = %music_style,
            "Planned synthesis request"
        );

        Ok(SynthesisPlan {
            voice,
            text,
            include_music,
            music_style,
            processed,
        })
    }

    fn run(&self, normalized: &NormalizedText) -> (Analysis, String) {
        let features = extract_features(normalized, &self.config);
        let classification = classify(&features, &self.config);
        let synthesis_text = transform(normalized, &classification);
        let recommendation = recommend(&classification, &self.config);

        tracing::debug!(
            category = %classification.category,
            score = classification.score,
            lines = classification.line_count,
            "Classified text"
        );

        let analysis = Analysis {
            category: classification.category,
            diagnostics: Diagnostics {
                score: classification.score,
                notes: classification.notes,
                has_rhyme_pattern: classification.has_rhyme_pattern,
                line_count: classification.line_count,
                is_multiline: classification.line_count > 1,
                avg_line_length: features.shape.avg_line_length,
                features,
            },
            recommendation,
        };
        (analysis, synthesis_text)
    }
}

fn normalize_non_empty(text: &str) -> Result<NormalizedText> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        let pipeline = TextPipeline::default();
        assert_eq!(pipeline.analyze("").unwrap_err(), Error::EmptyInput);
        assert_eq!(pipeline.process(" \n\t\r\n ").unwrap_err(), Error::EmptyInput);
        assert_eq!(
            pipeline.plan("", &SynthesisOptions::default()).unwrap_err(),
            Error::EmptyInput
        );
    }

    #[test]
    fn test_analyze_diagnostics() {
        let pipeline = TextPipeline::default();
        let analysis = pipeline.analyze("Hola\nmundo").unwrap();
        assert!(analysis.diagnostics.is_multiline);
        assert_eq!(analysis.diagnostics.line_count, 2);
        assert_eq!(analysis.diagnostics.avg_line_length, 4.5);
    }

    #[test]
    fn test_plan_uses_recommendation() {
        let pipeline = TextPipeline::default();
        let plan = pipeline
            .plan("Había una vez un reino lejano", &SynthesisOptions::default())
            .unwrap();
        assert_eq!(plan.voice, "v2/es_speaker_0");
        assert!(!plan.include_music);
        assert_eq!(plan.music_style, MusicStyle::Calm);
        assert_eq!(plan.text, "Había una vez un reino lejano");
    }

    #[test]
    fn test_plan_overrides() {
        let pipeline = TextPipeline::default();
        let options = SynthesisOptions {
            voice: Some("v2/en_speaker_3".to_string()),
            include_music: Some(true),
            music_style: Some(MusicStyle::Upbeat),
        };
        let plan = pipeline.plan("Buenos días", &options).unwrap();
        assert_eq!(plan.voice, "v2/en_speaker_3");
        assert_eq!(plan.text, "♪♪ [music] Buenos días [music] ♪♪");
    }

    #[test]
    fn test_custom_config() {
        let mut config = AnalysisConfig::default();
        config.vocabulary.narrative_markers = vec!["érase".to_string()];
        let pipeline = TextPipeline::new(config);
        let analysis = pipeline.analyze("Había una vez un reino lejano").unwrap();
        assert_eq!(analysis.category, ContentCategory::Generic);
    }

    #[test]
    fn test_shared_config_between_pipelines() {
        let mut config = AnalysisConfig::default();
        config.vocabulary.narrative_markers = vec!["érase".to_string()];
        let config = Arc::new(config);

        let first = TextPipeline::with_shared_config(Arc::clone(&config));
        let second = TextPipeline::with_shared_config(Arc::clone(&config));
        assert!(std::ptr::eq(first.config(), second.config()));
        assert_eq!(Arc::strong_count(&config), 3);

        let analysis = second.analyze("Érase una vez un reino lejano").unwrap();
        assert_eq!(analysis.category, ContentCategory::Narrative);
    }

    #[test]
    fn test_pipeline_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextPipeline>();
    }

    #[test]
    fn test_options_from_json() {
        let options: SynthesisOptions =
            serde_json::from_str(r#"{"music_style": "melody"}"#).unwrap();
        assert_eq!(options.music_style, Some(MusicStyle::Melody));
        assert!(options.voice.is_none());
    }
}

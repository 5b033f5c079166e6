//! Speech synthesis backend contract
//!
//! The pipeline never calls a backend itself. Callers take the text and voice
//! it recommends and hand them to an implementation of [`SpeechSynthesizer`].
//! The backend must understand the inline markup tokens the pipeline emits
//! (`♪`, `♪♪`, `...`, `[music]`, `[soft music]`).

use crate::SynthesisError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Cursor;

/// Output sample rate of the stub backend (matches the reference model)
pub const STUB_SAMPLE_RATE: u32 = 24_000;

/// Speech synthesis backend
#[async_trait::async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize marked-up text with the given voice preset, returning encoded audio
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SynthesisError>;

    /// Voice presets this backend accepts
    fn voices(&self) -> &VoiceCatalog;
}

/// Voice presets grouped by language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceCatalog {
    /// Language label -> voice identifiers
    #[serde(flatten)]
    pub languages: BTreeMap<String, Vec<String>>,
}

impl VoiceCatalog {
    /// Catalog with no voices
    pub fn empty() -> Self {
        Self {
            languages: BTreeMap::new(),
        }
    }

    /// Check whether a voice identifier is known
    pub fn contains(&self, voice: &str) -> bool {
        self.languages
            .values()
            .any(|voices| voices.iter().any(|v| v == voice))
    }

    /// Reject unknown voice identifiers
    pub fn validate(&self, voice: &str) -> Result<(), SynthesisError> {
        if self.contains(voice) {
            Ok(())
        } else {
            Err(SynthesisError::InvalidVoice(voice.to_string()))
        }
    }

    /// Total number of voices across all languages
    pub fn len(&self) -> usize {
        self.languages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        let speakers = |lang: &str, count: usize| -> Vec<String> {
            (0..count)
                .map(|i| format!("v2/{}_speaker_{}", lang, i))
                .collect()
        };

        let mut languages = BTreeMap::new();
        languages.insert("english".to_string(), speakers("en", 10));
        languages.insert("spanish".to_string(), speakers("es", 10));
        languages.insert(
            "other_languages".to_string(),
            ["zh", "fr", "de", "hi", "it", "ja", "ko", "pl", "pt", "ru", "tr"]
                .iter()
                .flat_map(|lang| speakers(lang, 3))
                .collect(),
        );

        Self { languages }
    }
}

/// Backend that returns silence (for tests and local development)
pub struct StubSynthesizer {
    sample_rate: u32,
    voices: VoiceCatalog,
}

impl StubSynthesizer {
    pub fn new(sample_rate: u32) -> Self {
        tracing::warn!("Using stub synthesis backend - audio output will be silence");
        Self {
            sample_rate,
            voices: VoiceCatalog::default(),
        }
    }

    /// Use a custom voice catalog
    pub fn with_voices(mut self, voices: VoiceCatalog) -> Self {
        self.voices = voices;
        self
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn silent_wav(&self, samples: usize) -> Result<Vec<u8>, SynthesisError> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec)
                .map_err(|e| SynthesisError::Backend(format!("WAV header: {}", e)))?;
            for _ in 0..samples {
                writer
                    .write_sample(0i16)
                    .map_err(|e| SynthesisError::Backend(format!("WAV write: {}", e)))?;
            }
            writer
                .finalize()
                .map_err(|e| SynthesisError::Backend(format!("WAV finalize: {}", e)))?;
        }

        Ok(cursor.into_inner())
    }
}

impl Default for StubSynthesizer {
    fn default() -> Self {
        Self::new(STUB_SAMPLE_RATE)
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for StubSynthesizer {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SynthesisError> {
        self.voices.validate(voice)?;
        if text.trim().is_empty() {
            return Err(SynthesisError::Backend("nothing to synthesize".to_string()));
        }

        // ~50ms of silence per character
        let samples = text.chars().count() * (self.sample_rate as usize / 20);
        tracing::debug!(voice, samples, "Stub synthesis");
        self.silent_wav(samples)
    }

    fn voices(&self) -> &VoiceCatalog {
        &self.voices
    }
}

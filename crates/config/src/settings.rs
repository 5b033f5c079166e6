//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use verse_voice_core::VoiceCatalog;

use crate::constants::synthesis;
use crate::{AnalysisConfig, ConfigError};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Classifier tables and thresholds
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Settings for the caller's synthesis step
    #[serde(default)]
    pub synthesis: SynthesisSettings,

    /// Voices accepted by the backend
    #[serde(default)]
    pub voices: VoiceCatalog,

    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate()?;

        if self.synthesis.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "synthesis.timeout_ms".to_string(),
                message: "Timeout must be positive".to_string(),
            });
        }

        // Recommended voices outside the catalog only get a warning; a backend
        // may know presets the catalog does not list.
        let slots = &self.analysis.voices;
        for (slot, voice) in [
            ("narrator", &slots.narrator),
            ("singer", &slots.singer),
            ("reciter", &slots.reciter),
        ] {
            if !self.voices.is_empty() && !self.voices.contains(voice) {
                tracing::warn!(
                    slot,
                    voice = %voice,
                    "Recommended voice is not in the voice catalog"
                );
            }
        }

        Ok(())
    }
}

/// Synthesis call settings (used by callers, not by the pipeline)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisSettings {
    /// Timeout for one backend call (ms)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Expected backend sample rate (Hz)
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

fn default_timeout_ms() -> u64 {
    synthesis::TIMEOUT_MS
}

fn default_sample_rate() -> u32 {
    synthesis::SAMPLE_RATE
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            sample_rate: default_sample_rate(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Default log level when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Sources, later ones override earlier ones:
/// 1. config/default.{yaml,toml}
/// 2. config/{env}.{yaml,toml}
/// 3. Environment variables (VERSE_VOICE__ prefix, `__` separator)
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("VERSE_VOICE")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

//! Verse Voice command-line entry point
//!
//! Reads text from a file or stdin, runs the pipeline and prints the result
//! as JSON. With `--synthesize` the plan is also sent to the stub backend and
//! the WAV bytes are written to the given path.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use verse_voice_config::{load_settings, AnalysisConfig, Settings};
use verse_voice_core::{MusicStyle, SpeechSynthesizer, StubSynthesizer};
use verse_voice_text_processing::{SynthesisOptions, TextPipeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Analyze,
    Process,
    Plan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Switch {
    On,
    Off,
}

/// Characterize text and prepare it for speech synthesis
#[derive(Debug, Parser)]
#[command(name = "verse-voice", version)]
#[command(about = "Classify text and mark it up for speech synthesis", long_about = None)]
struct Cli {
    /// Print the classification and its diagnostics only
    #[arg(long, conflicts_with_all = ["plan", "synthesize"])]
    analyze: bool,

    /// Print the synthesis plan (voice, music and final text)
    #[arg(long)]
    plan: bool,

    /// Settings overlay loaded from config/{ENV}
    #[arg(long, value_name = "ENV")]
    env: Option<String>,

    /// Analysis tables (YAML or TOML) replacing the configured ones
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Voice preset overriding the recommendation
    #[arg(long, value_name = "ID")]
    voice: Option<String>,

    /// Force background music on or off
    #[arg(long, value_enum)]
    music: Option<Switch>,

    /// Music style overriding the recommendation
    #[arg(long, value_parser = MusicStyle::from_str)]
    style: Option<MusicStyle>,

    /// Send the plan to the stub backend and write the WAV here
    #[arg(long, value_name = "OUT.wav")]
    synthesize: Option<PathBuf>,

    /// Input text; stdin when omitted
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.analyze {
            Mode::Analyze
        } else if self.plan || self.synthesize.is_some() {
            Mode::Plan
        } else {
            Mode::Process
        }
    }

    fn options(&self) -> SynthesisOptions {
        SynthesisOptions {
            voice: self.voice.clone(),
            music_style: self.style,
            include_music: self.music.map(|m| m == Switch::On),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mode = cli.mode();

    let mut settings = load_settings(cli.env.as_deref()).context("loading settings")?;
    if let Some(path) = &cli.config {
        settings.analysis = AnalysisConfig::load(path)
            .with_context(|| format!("loading analysis config {}", path.display()))?;
    }

    init_tracing(&settings);
    tracing::debug!(mode = ?mode, "Starting verse-voice v{}", env!("CARGO_PKG_VERSION"));

    let text = read_input(cli.input.as_ref()).await?;
    let pipeline = TextPipeline::with_shared_config(Arc::new(settings.analysis.clone()));

    let output = match mode {
        Mode::Analyze => serde_json::to_string_pretty(&pipeline.analyze(&text)?)?,
        Mode::Process => serde_json::to_string_pretty(&pipeline.process(&text)?)?,
        Mode::Plan => {
            let plan = pipeline.plan(&text, &cli.options())?;
            if let Some(out) = &cli.synthesize {
                let backend = StubSynthesizer::new(settings.synthesis.sample_rate)
                    .with_voices(settings.voices.clone());
                tracing::debug!(
                    sample_rate = backend.sample_rate(),
                    voices = backend.voices().len(),
                    "Synthesis backend ready"
                );
                let timeout = Duration::from_millis(settings.synthesis.timeout_ms);

                let request = backend.synthesize(&plan.text, &plan.voice);
                let audio = tokio::time::timeout(timeout, request)
                    .await
                    .context("synthesis timed out")??;
                tokio::fs::write(out, &audio)
                    .await
                    .with_context(|| format!("writing {}", out.display()))?;
                tracing::info!(path = %out.display(), bytes = audio.len(), "Wrote audio");
            }
            serde_json::to_string_pretty(&plan)?
        }
    };

    println!("{}", output);
    Ok(())
}

async fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("verse_voice={level},verse_voice_text_processing={level},verse_voice_config={level},verse_voice_core={level}").into()
    });

    // Logs go to stderr so stdout stays valid JSON
    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
}

//! Core traits and types for the verse voice pipeline
//!
//! This crate provides foundational types used across all other crates:
//! - Content categories and music styles
//! - Processing and segmentation strategy tags
//! - Error types
//! - The speech synthesis backend contract

pub mod content;
pub mod error;
pub mod synthesis;

pub use content::{ContentCategory, MusicStyle, ProcessingStrategy, SegmentationStrategy};
pub use error::{Error, Result, SynthesisError};
pub use synthesis::{SpeechSynthesizer, StubSynthesizer, VoiceCatalog, STUB_SAMPLE_RATE};

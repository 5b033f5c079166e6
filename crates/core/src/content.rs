//! Content categories and synthesis strategy tags
//!
//! These enums travel across crate boundaries and into JSON output, so their
//! serialized snake_case tags are fixed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Detected kind of free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    Song,
    Poem,
    Narrative,
    /// Anything that matched no other rule
    #[serde(rename = "text", alias = "generic")]
    Generic,
}

impl ContentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Song => "song",
            Self::Poem => "poem",
            Self::Narrative => "narrative",
            Self::Generic => "text",
        }
    }

    /// Categories that get musical accompaniment by default
    pub fn is_musical(&self) -> bool {
        matches!(self, Self::Song | Self::Poem)
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Music style requested from the synthesis backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MusicStyle {
    #[default]
    Background,
    Melody,
    Upbeat,
    Calm,
}

impl MusicStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Melody => "melody",
            Self::Upbeat => "upbeat",
            Self::Calm => "calm",
        }
    }
}

impl fmt::Display for MusicStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MusicStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "background" => Ok(Self::Background),
            "melody" => Ok(Self::Melody),
            "upbeat" => Ok(Self::Upbeat),
            "calm" => Ok(Self::Calm),
            other => Err(format!("unknown music style: {}", other)),
        }
    }
}

/// How the text is prepared before synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStrategy {
    SongWithRhythm,
    PoemWithPauses,
    NarrativeFlow,
    Standard,
}

impl ProcessingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SongWithRhythm => "song_with_rhythm",
            Self::PoemWithPauses => "poem_with_pauses",
            Self::NarrativeFlow => "narrative_flow",
            Self::Standard => "standard",
        }
    }
}

impl From<ContentCategory> for ProcessingStrategy {
    fn from(category: ContentCategory) -> Self {
        match category {
            ContentCategory::Song => Self::SongWithRhythm,
            ContentCategory::Poem => Self::PoemWithPauses,
            ContentCategory::Narrative => Self::NarrativeFlow,
            ContentCategory::Generic => Self::Standard,
        }
    }
}

impl fmt::Display for ProcessingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory hint for splitting text across several synthesis calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentationStrategy {
    SplitByStanzas,
    SplitByLines,
    KeepTogether,
}

impl SegmentationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SplitByStanzas => "split_by_stanzas",
            Self::SplitByLines => "split_by_lines",
            Self::KeepTogether => "keep_together",
        }
    }
}

impl fmt::Display for SegmentationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

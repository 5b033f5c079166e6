//! Text extraction from heterogeneous request payloads
//!
//! Callers receive text as a bare JSON string, as an object carrying a
//! `text` field, or as some other value entirely. Everything is reduced to a
//! single string before it reaches the pipeline.

use serde_json::Value;
use verse_voice_core::{Error, Result};

use crate::normalize::normalize;

/// Extract the text from a recognized payload shape, normalized
pub fn try_extract_text(value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(normalize(text).source().to_string()),
        Value::Object(map) => match map.get("text") {
            Some(Value::String(text)) => Ok(normalize(text).source().to_string()),
            Some(other) => Err(Error::InvalidInputShape(format!(
                "`text` field holds {} instead of a string",
                kind(other)
            ))),
            None => Err(Error::InvalidInputShape(
                "object has no `text` field".to_string(),
            )),
        },
        other => Err(Error::InvalidInputShape(format!(
            "expected a string or an object with `text`, got {}",
            kind(other)
        ))),
    }
}

/// Extract text, falling back to a plain stringification of the value
pub fn extract_text(value: &Value) -> String {
    match try_extract_text(value) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to stringified input");
            stringify(value)
        }
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Error types for the verse voice pipeline

use thiserror::Error;

/// Pipeline result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the text pipeline entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input is empty or whitespace-only after normalization
    #[error("Input text is empty")]
    EmptyInput,

    /// Structured input carried no recognizable text field
    #[error("Unrecognized input shape: {0}")]
    InvalidInputShape(String),

    #[error("Synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),
}

/// Failures reported by a speech synthesis backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("Synthesis backend failure: {0}")]
    Backend(String),

    #[error("Invalid voice identifier: {0}")]
    InvalidVoice(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesis_error_converts() {
        let err: Error = SynthesisError::InvalidVoice("v9/xx".to_string()).into();
        assert_eq!(
            err,
            Error::Synthesis(SynthesisError::InvalidVoice("v9/xx".to_string()))
        );
        assert_eq!(
            err.to_string(),
            "Synthesis error: Invalid voice identifier: v9/xx"
        );
    }

    #[test]
    fn test_empty_input_message() {
        assert_eq!(Error::EmptyInput.to_string(), "Input text is empty");
    }
}

//! Failure taxonomy for the generation backend.

use std::fmt;

use thiserror::Error;

/// Failure returned by an image generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Credential environment variable is unset or blank.
    #[error("API key is missing: set the {env} environment variable")]
    MissingCredential { env: String },

    /// Backend rejected the credential.
    #[error("API key was rejected: {0}")]
    InvalidCredential(String),

    /// Backend declined and explained why in text.
    #[error("Model declined to generate image: {0}")]
    Refused(String),

    /// Response carried neither an image nor an explanation.
    #[error("No image data found in response")]
    EmptyResponse,

    /// Network, HTTP, or decoding failure.
    #[error("{0}")]
    Transport(String),
}

impl GenerationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenerationError::MissingCredential { .. } | GenerationError::InvalidCredential(_) => {
                ErrorCategory::Configuration
            }
            GenerationError::Refused(_) => ErrorCategory::Refusal,
            GenerationError::EmptyResponse | GenerationError::Transport(_) => {
                ErrorCategory::Transport
            }
        }
    }
}

/// User-facing classification of a session error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or invalid credential.
    Configuration,
    /// The model declined the request.
    Refusal,
    /// Any other generation failure.
    Transport,
    /// Parameters could not be compiled into an instruction.
    Validation,
}

/// The session's single error slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    pub category: ErrorCategory,
    pub message: String,
}

impl SessionError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self { category: ErrorCategory::Validation, message: message.into() }
    }

    /// Map a generation failure to the message shown to the user.
    pub fn from_generation(err: &GenerationError) -> Self {
        let message = match err {
            GenerationError::MissingCredential { env } => format!(
                "API key not found. Set the {} environment variable and try again.",
                env
            ),
            GenerationError::InvalidCredential(_) => {
                "API key was rejected. Verify your API key configuration and try again."
                    .to_string()
            }
            GenerationError::Refused(text) => format!("Model declined to generate image: {}", text),
            GenerationError::EmptyResponse | GenerationError::Transport(_) => {
                "An unexpected error occurred while generating the image. Please try again."
                    .to_string()
            }
        };
        Self { category: err.category(), message }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

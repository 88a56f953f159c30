use std::io;

use thiserror::Error;

use super::prompt::PromptError;

/// Library-wide error type for imagelab operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file was requested explicitly but does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No template with the given id exists in the registry.
    #[error("Template '{0}' not found. Run 'imagelab templates' to list available templates.")]
    TemplateNotFound(String),

    /// A parameter value was rejected by the template schema.
    #[error("Invalid value for parameter '{param}' of template '{template}': {reason}")]
    InvalidParameter { template: String, param: String, reason: String },

    /// A `-p id=value` assignment could not be parsed.
    #[error("Invalid parameter assignment '{0}': expected id=value")]
    InvalidAssignment(String),

    /// Prompt compilation failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The session rejected a mutation because a generation is in flight.
    #[error("A generation request is already in progress")]
    SessionBusy,

    /// The operation needs a working image but the session is empty.
    #[error("No image loaded")]
    NoImage,

    /// The uploaded image exceeds the configured size limit.
    #[error("Image too large ({size} bytes). Please use an image smaller than {limit} bytes.")]
    ImageTooLarge { size: u64, limit: u64 },

    /// The image format is not one of the accepted types.
    #[error("Unsupported image '{0}': expected PNG, JPEG, or WebP")]
    UnsupportedImage(String),

    /// An embedded image string could not be decoded.
    #[error("Invalid image data: {0}")]
    InvalidImageData(String),

    /// No library item with the given id exists.
    #[error("Library item '{0}' not found")]
    LibraryItemNotFound(String),

    /// Unknown library classification.
    #[error("Invalid library item type '{0}': must be 'draft' or 'saved'")]
    InvalidItemKind(String),

    /// Generation finished with an error recorded in the session.
    #[error("{0}")]
    GenerationFailed(String),

    /// Interactive prompt failure.
    #[error("Interactive prompt failed: {0}")]
    Interaction(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn invalid_parameter(
        template: &str,
        param: &str,
        reason: impl Into<String>,
    ) -> Self {
        AppError::InvalidParameter {
            template: template.to_string(),
            param: param.to_string(),
            reason: reason.into(),
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::Json(_)
            | AppError::InvalidParameter { .. }
            | AppError::InvalidAssignment(_)
            | AppError::Prompt(_)
            | AppError::ImageTooLarge { .. }
            | AppError::UnsupportedImage(_)
            | AppError::InvalidImageData(_)
            | AppError::InvalidItemKind(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_)
            | AppError::TemplateNotFound(_)
            | AppError::LibraryItemNotFound(_) => io::ErrorKind::NotFound,
            AppError::SessionBusy => io::ErrorKind::WouldBlock,
            AppError::NoImage | AppError::GenerationFailed(_) | AppError::Interaction(_) => {
                io::ErrorKind::Other
            }
        }
    }
}

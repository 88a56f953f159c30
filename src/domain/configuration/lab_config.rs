//! Configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `.imagelab/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabConfig {
    /// Generation backend configuration.
    #[serde(default)]
    pub gemini: GeminiApiConfig,
    /// Library storage configuration.
    #[serde(default)]
    pub library: LibraryConfig,
    /// Upload limits.
    #[serde(default)]
    pub upload: UploadConfig,
}

impl LabConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gemini.validate()?;
        self.library.validate()?;
        self.upload.validate()?;
        Ok(())
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// API base URL; requests go to `{api_url}/models/{model}:generateContent`.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Image-capable model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout(),
        }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::InvalidConfig("api_key_env must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Full endpoint for the configured model.
    pub fn endpoint(&self) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/models/{}:generateContent", base, self.model))
            .map_err(|e| AppError::InvalidConfig(format!("Invalid Gemini endpoint: {}", e)))
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout() -> u64 {
    120
}

/// Library storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryConfig {
    /// Directory holding the library blob.
    #[serde(default = "default_library_dir")]
    pub dir: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self { dir: default_library_dir() }
    }
}

impl LibraryConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dir.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("library.dir must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_library_dir() -> PathBuf {
    PathBuf::from(super::CONFIG_DIR)
}

/// Upload limits applied before an image reaches a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UploadConfig {
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self { max_bytes: default_max_bytes() }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_bytes == 0 {
            return Err(AppError::InvalidConfig("max_bytes must be greater than 0".to_string()));
        }
        Ok(())
    }
}

fn default_max_bytes() -> u64 {
    8 * 1024 * 1024
}

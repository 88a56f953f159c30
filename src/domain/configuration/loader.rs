//! Configuration loading.

use std::fs;
use std::path::Path;

use super::{CONFIG_DIR, CONFIG_FILE};
use crate::domain::{AppError, LabConfig};

/// Load configuration.
///
/// An explicit `path` must exist. Otherwise `<root>/.imagelab/config.toml` is
/// used when present, falling back to built-in defaults.
pub fn load_config(root: &Path, path: Option<&Path>) -> Result<LabConfig, AppError> {
    let config_path = match path {
        Some(explicit) => {
            if !explicit.exists() {
                return Err(AppError::ConfigMissing(explicit.display().to_string()));
            }
            Some(explicit.to_path_buf())
        }
        None => Some(root.join(CONFIG_DIR).join(CONFIG_FILE)).filter(|p| p.exists()),
    };

    let mut config = match config_path {
        Some(config_path) => {
            tracing::debug!(path = %config_path.display(), "Loading config");
            let content = fs::read_to_string(&config_path)?;
            parse_config_content(&content)?
        }
        None => {
            tracing::debug!("No config file found; using defaults");
            LabConfig::default()
        }
    };

    if config.library.dir.is_relative() {
        config.library.dir = root.join(&config.library.dir);
    }
    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<LabConfig, AppError> {
    let config: LabConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

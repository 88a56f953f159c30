pub mod lab_config;
pub mod loader;

pub use lab_config::{GeminiApiConfig, LabConfig, LibraryConfig, UploadConfig};
pub use loader::{load_config, parse_config_content};

/// Per-project directory holding config and library data.
pub const CONFIG_DIR: &str = ".imagelab";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

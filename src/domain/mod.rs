pub mod configuration;
pub mod error;
pub mod generation;
pub mod history;
pub mod image;
pub mod library;
pub mod prompt;
pub mod session;
pub mod template;

pub use configuration::{GeminiApiConfig, LabConfig, LibraryConfig, UploadConfig};
pub use error::AppError;
pub use generation::{ErrorCategory, GenerationError, SessionError};
pub use history::EditHistory;
pub use image::{Image, ImageFormat};
pub use library::{ItemKind, LIBRARY_KEY, Library, LibraryItem};
pub use prompt::{Instruction, OUTPUT_DIRECTIVE, PromptError, compile, placeholders};
pub use session::{EditSession, GenerationRequest, SessionState};
pub use template::{
    ChoiceOption, Icon, ParamDef, ParamKind, ParamValue, ParamValues, TEMPLATES, Template,
    default_template, lookup, scene_templates,
};

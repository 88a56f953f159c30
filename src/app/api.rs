//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::app::{
    AppContext,
    commands::{edit, library, prompt, templates},
};
use crate::domain::configuration::load_config;
use crate::domain::{Instruction, ItemKind, LibraryItem, Template};
use crate::ports::{ImageGenerator, MockImageGenerator};
use crate::services::{FileBlobStore, HttpGeminiClient};

pub use crate::app::commands::edit::{EditOptions, EditOutcome};
pub use crate::domain::AppError;

/// Context wired to the configured backend and the on-disk library.
pub type LabContext = AppContext<Box<dyn ImageGenerator>, FileBlobStore>;

/// Create a context for the project rooted at `root`.
///
/// With `mock`, generation returns the input image without any network access.
pub fn open_context(root: &Path, config_path: Option<&Path>, mock: bool) -> Result<LabContext, AppError> {
    let config = load_config(root, config_path)?;
    let generator: Box<dyn ImageGenerator> = if mock {
        Box::new(MockImageGenerator)
    } else {
        Box::new(HttpGeminiClient::new(&config.gemini)?)
    };
    let store = FileBlobStore::new(config.library.dir.clone());
    Ok(AppContext::new(config, generator, store))
}

/// List templates in display order.
pub fn list_templates(scenes_only: bool) -> Vec<&'static Template> {
    templates::list(scenes_only)
}

/// Look up a template by id.
pub fn describe_template(id: &str) -> Result<&'static Template, AppError> {
    templates::describe(id)
}

/// Compile the instruction for a template with `id=value` overrides.
pub fn compile_prompt(template_id: &str, assignments: &[String]) -> Result<Instruction, AppError> {
    prompt::execute(template_id, assignments)
}

/// Run a one-shot edit in the current directory.
pub fn edit(options: &EditOptions, config_path: Option<&Path>, mock: bool) -> Result<EditOutcome, AppError> {
    edit_at(std::env::current_dir()?, options, config_path, mock)
}

/// Run a one-shot edit for the project at `root`.
pub fn edit_at(
    root: impl Into<PathBuf>,
    options: &EditOptions,
    config_path: Option<&Path>,
    mock: bool,
) -> Result<EditOutcome, AppError> {
    let mut ctx = open_context(&root.into(), config_path, mock)?;
    edit::execute(&mut ctx, options)
}

/// List library items for the project at `root`, newest first.
pub fn library_list_at(
    root: &Path,
    config_path: Option<&Path>,
    kind: Option<ItemKind>,
) -> Result<Vec<LibraryItem>, AppError> {
    let ctx = open_context(root, config_path, true)?;
    Ok(library::list(&ctx, kind).into_iter().cloned().collect())
}

/// Delete a library item for the project at `root`.
pub fn library_delete_at(root: &Path, config_path: Option<&Path>, id: &str) -> Result<(), AppError> {
    let mut ctx = open_context(root, config_path, true)?;
    library::delete(&mut ctx, id)
}

/// Export a library item for the project at `root` into `dir`.
pub fn library_export_at(
    root: &Path,
    config_path: Option<&Path>,
    id: &str,
    dir: &Path,
) -> Result<PathBuf, AppError> {
    let ctx = open_context(root, config_path, true)?;
    library::export(&ctx, id, dir)
}

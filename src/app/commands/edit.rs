//! One-shot edit: load, generate, apply, export.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, EditSession, Instruction, ItemKind};
use crate::ports::{BlobStore, ImageGenerator};
use crate::services::{export_image, load_image_file};

use super::prompt::resolve_values;
use super::templates;

#[derive(Debug, Clone)]
pub struct EditOptions {
    pub image: PathBuf,
    pub template: String,
    /// Raw `id=value` assignments.
    pub params: Vec<String>,
    pub output_dir: PathBuf,
    /// Also save the result to the library.
    pub save: Option<ItemKind>,
}

#[derive(Debug, Clone)]
pub struct EditOutcome {
    pub instruction: Instruction,
    pub exported: PathBuf,
    pub saved_id: Option<String>,
}

/// Execute the edit command.
pub fn execute<G, S>(ctx: &mut AppContext<G, S>, options: &EditOptions) -> Result<EditOutcome, AppError>
where
    G: ImageGenerator,
    S: BlobStore,
{
    let template = templates::describe(&options.template)?;
    let values = resolve_values(template, &options.params)?;
    let image = load_image_file(&options.image, ctx.config().upload.max_bytes)?;

    let mut session = EditSession::new();
    session.load_image(image);
    session.select_template(template.id)?;
    for (id, value) in values.iter() {
        session.set_parameter(id, value.clone())?;
    }

    let Some(request) = session.begin_generation() else {
        let message = session.error().map(|e| e.to_string()).unwrap_or_default();
        return Err(AppError::GenerationFailed(message));
    };
    let result = ctx.generator().generate(&request.image, &request.instruction);
    session.complete_generation(request.ticket, result);

    if let Some(error) = session.error() {
        return Err(AppError::GenerationFailed(error.to_string()));
    }
    session.apply();

    let result = session.working_image().cloned().ok_or(AppError::NoImage)?;
    let exported = export_image(&result, &options.output_dir)?;
    let saved_id = options.save.map(|kind| ctx.library_mut().add(result, kind).id.clone());

    Ok(EditOutcome { instruction: request.instruction, exported, saved_id })
}

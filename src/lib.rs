//! imagelab: template-driven image editing against a generative image model.
//!
//! The edit session keeps a linear undo/redo history of image snapshots,
//! compiles parameterized templates into natural-language instructions and
//! holds at most one generated preview awaiting apply or discard.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    EditOptions, EditOutcome, LabContext, compile_prompt, describe_template, edit, edit_at,
    library_delete_at, library_export_at, library_list_at, list_templates, open_context,
};
pub use domain::{
    AppError, EditSession, GenerationError, Image, ImageFormat, Instruction, ItemKind,
    LibraryItem, ParamValue, SessionState,
};
pub use ports::{BlobStore, ImageGenerator, MockImageGenerator};

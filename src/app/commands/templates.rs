//! Template listing and inspection.

use crate::domain::{AppError, TEMPLATES, Template, lookup, scene_templates};

/// Templates in display order, optionally restricted to the quick-start scenes.
pub fn list(scenes_only: bool) -> Vec<&'static Template> {
    if scenes_only { scene_templates().collect() } else { TEMPLATES.iter().collect() }
}

/// Resolve a template by id.
pub fn describe(id: &str) -> Result<&'static Template, AppError> {
    lookup(id).ok_or_else(|| AppError::TemplateNotFound(id.to_string()))
}

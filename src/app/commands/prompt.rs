//! Parameter assignment parsing and instruction preview.

use crate::domain::{AppError, Instruction, ParamValues, Template, compile};

use super::templates;

/// Split an `id=value` assignment.
pub fn parse_param_assignment(raw: &str) -> Result<(&str, &str), AppError> {
    match raw.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() => Ok((id.trim(), value)),
        _ => Err(AppError::InvalidAssignment(raw.to_string())),
    }
}

/// Start from the template defaults and apply each assignment in order.
pub fn resolve_values(template: &Template, assignments: &[String]) -> Result<ParamValues, AppError> {
    let mut values = template.default_values();
    for raw in assignments {
        let (id, text) = parse_param_assignment(raw)?;
        let def = template
            .param(id)
            .ok_or_else(|| AppError::invalid_parameter(template.id, id, "unknown parameter"))?;
        let value =
            def.parse_value(text).map_err(|reason| AppError::invalid_parameter(template.id, id, reason))?;
        values.insert(id, value);
    }
    Ok(values)
}

/// Compile the instruction for `template_id` with the given overrides.
pub fn execute(template_id: &str, assignments: &[String]) -> Result<Instruction, AppError> {
    let template = templates::describe(template_id)?;
    let values = resolve_values(template, assignments)?;
    Ok(compile(template, &values)?)
}

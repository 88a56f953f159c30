//! Compiles a template's instruction pattern against parameter values.
//!
//! Placeholders have the form `${param_id}`. Only ids declared in the
//! template schema are substituted; anything else is an error, so a literal
//! placeholder never reaches the generation backend.

use std::fmt;

use thiserror::Error;

use crate::domain::template::{ParamValues, Template};

/// Directive appended to every instruction sent to the backend.
pub const OUTPUT_DIRECTIVE: &str = "Output only the edited image.";

const OPEN: &str = "${";
const CLOSE: char = '}';

/// Errors raised while compiling an instruction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PromptError {
    #[error("Template '{template}' references undeclared placeholder '${{{placeholder}}}'")]
    UnknownPlaceholder { template: String, placeholder: String },

    #[error("Template '{template}' is missing a value for parameter '{param}'")]
    MissingValue { template: String, param: String },

    #[error("Invalid value for parameter '{param}' of template '{template}': {reason}")]
    InvalidValue { template: String, param: String, reason: String },
}

/// A fully compiled, placeholder-free instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction(String);

impl Instruction {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Instruction text with the output-only-the-image directive appended.
    ///
    /// The separator is a space followed by a blank line; the service has
    /// always received it in exactly this form.
    pub fn with_output_directive(&self) -> String {
        format!("{} \n\n{}", self.0, OUTPUT_DIRECTIVE)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Placeholder ids referenced by `pattern`, in order of occurrence.
///
/// An unterminated `${` is treated as literal text.
pub fn placeholders(pattern: &str) -> Vec<&str> {
    scan(pattern)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(id) => Some(id),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Compile `template` against `values`.
///
/// Every referenced parameter must have a value that validates against its
/// definition; missing values fail rather than falling back to defaults.
pub fn compile(template: &Template, values: &ParamValues) -> Result<Instruction, PromptError> {
    let mut out = String::with_capacity(template.pattern.len());

    for segment in scan(template.pattern) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(id) => {
                let def = template.param(id).ok_or_else(|| PromptError::UnknownPlaceholder {
                    template: template.id.to_string(),
                    placeholder: id.to_string(),
                })?;
                let value = values.get(id).ok_or_else(|| PromptError::MissingValue {
                    template: template.id.to_string(),
                    param: id.to_string(),
                })?;
                def.validate(value).map_err(|reason| PromptError::InvalidValue {
                    template: template.id.to_string(),
                    param: id.to_string(),
                    reason,
                })?;
                out.push_str(&value.to_string());
            }
        }
    }

    Ok(Instruction(out))
}

#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn scan(pattern: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = pattern;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            break;
        };
        if start > 0 {
            segments.push(Segment::Literal(&rest[..start]));
        }
        segments.push(Segment::Placeholder(&after_open[..end]));
        rest = &after_open[end + CLOSE.len_utf8()..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    segments
}

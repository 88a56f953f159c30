//! Edit templates: parameter schemas and instruction patterns.

mod catalog;
mod icon;
mod value;

pub use catalog::{
    DEFAULT_TEMPLATE_ID, SCENE_TEMPLATE_IDS, TEMPLATES, default_template, lookup, scene_templates,
};
pub use icon::Icon;
pub use value::{ParamValue, ParamValues};

/// A named, parameterized edit operation.
///
/// Templates are defined statically and never mutated.
#[derive(Debug, PartialEq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub params: &'static [ParamDef],
    /// Instruction text containing `${param_id}` placeholders.
    pub pattern: &'static str,
}

impl Template {
    /// Find a parameter definition by id.
    pub fn param(&self, id: &str) -> Option<&'static ParamDef> {
        self.params.iter().find(|p| p.id == id)
    }

    /// Default value for every parameter, in schema order.
    pub fn default_values(&self) -> ParamValues {
        ParamValues::defaults_for(self)
    }
}

/// One selectable option of a choice parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoiceOption {
    pub label: &'static str,
    /// The text substituted into the instruction.
    pub value: &'static str,
}

/// Semantic kind of a parameter, including its default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    /// Single-line free text.
    Text { default: &'static str },
    /// Multi-line free text.
    MultilineText { default: &'static str },
    /// Numeric slider.
    Range { min: f64, max: f64, step: f64, default: f64 },
    /// Hex color string such as `#ffffff`.
    Color { default: &'static str },
    /// Enumerated choice from a fixed option set; `default` is an option value.
    Choice { options: &'static [ChoiceOption], default: &'static str },
}

impl ParamKind {
    /// Short name used when describing a schema.
    pub fn name(&self) -> &'static str {
        match self {
            ParamKind::Text { .. } => "text",
            ParamKind::MultilineText { .. } => "textarea",
            ParamKind::Range { .. } => "range",
            ParamKind::Color { .. } => "color",
            ParamKind::Choice { .. } => "choice",
        }
    }
}

/// A single parameter in a template's schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDef {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ParamKind,
}

impl ParamDef {
    pub fn default_value(&self) -> ParamValue {
        match self.kind {
            ParamKind::Text { default } | ParamKind::MultilineText { default } => {
                ParamValue::Text(default.to_string())
            }
            ParamKind::Range { default, .. } => ParamValue::Number(default),
            ParamKind::Color { default } => ParamValue::Color(default.to_string()),
            ParamKind::Choice { default, .. } => ParamValue::Text(default.to_string()),
        }
    }

    /// Check that a value is consistent with this parameter's kind.
    pub fn validate(&self, value: &ParamValue) -> Result<(), String> {
        match (&self.kind, value) {
            (ParamKind::Text { .. }, ParamValue::Text(text)) => {
                if text.contains('\n') {
                    return Err("single-line text must not contain line breaks".to_string());
                }
                Ok(())
            }
            (ParamKind::MultilineText { .. }, ParamValue::Text(_)) => Ok(()),
            (ParamKind::Range { min, max, step, .. }, ParamValue::Number(n)) => {
                if !n.is_finite() || *n < *min || *n > *max {
                    return Err(format!("{} is outside the range {}..={}", n, min, max));
                }
                if *step > 0.0 {
                    // Tolerance absorbs decimal steps like 0.1.
                    let steps = (n - min) / step;
                    if (steps - steps.round()).abs() > 1e-6 {
                        return Err(format!("{} is not a multiple of {} from {}", n, step, min));
                    }
                }
                Ok(())
            }
            (ParamKind::Color { .. }, ParamValue::Color(color)) => {
                if is_hex_color(color) {
                    Ok(())
                } else {
                    Err(format!("'{}' is not a #rgb or #rrggbb color", color))
                }
            }
            (ParamKind::Choice { options, .. }, ParamValue::Text(choice)) => {
                if options.iter().any(|o| o.value == choice) {
                    Ok(())
                } else {
                    let allowed: Vec<&str> = options.iter().map(|o| o.value).collect();
                    Err(format!("'{}' is not one of: {}", choice, allowed.join(", ")))
                }
            }
            (kind, value) => {
                Err(format!("expected a {} value, got {}", kind.name(), value.kind_name()))
            }
        }
    }

    /// Parse raw user text (e.g. from `-p id=value`) into a value of this kind.
    ///
    /// Choices accept either the option value or, case-insensitively, its label.
    pub fn parse_value(&self, raw: &str) -> Result<ParamValue, String> {
        let value = match self.kind {
            ParamKind::Text { .. } | ParamKind::MultilineText { .. } => {
                ParamValue::Text(raw.to_string())
            }
            ParamKind::Range { .. } => {
                let n: f64 =
                    raw.trim().parse().map_err(|_| format!("'{}' is not a number", raw))?;
                ParamValue::Number(n)
            }
            ParamKind::Color { .. } => ParamValue::Color(raw.trim().to_string()),
            ParamKind::Choice { options, .. } => {
                let raw = raw.trim();
                let option = options
                    .iter()
                    .find(|o| o.value == raw)
                    .or_else(|| options.iter().find(|o| o.label.eq_ignore_ascii_case(raw)));
                match option {
                    Some(o) => ParamValue::Text(o.value.to_string()),
                    None => ParamValue::Text(raw.to_string()),
                }
            }
        };
        self.validate(&value)?;
        Ok(value)
    }
}

fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(id: &str) -> &'static ParamDef {
        lookup("background_change_marketing").unwrap().param(id).unwrap()
    }

    #[test]
    fn range_rejects_out_of_bounds() {
        let opacity = param("opacity");
        assert!(opacity.validate(&ParamValue::Number(0.5)).is_ok());
        assert!(opacity.validate(&ParamValue::Number(1.5)).is_err());
        assert!(opacity.validate(&ParamValue::Number(f64::NAN)).is_err());
    }

    #[test]
    fn range_rejects_values_off_the_step_grid() {
        let scale = lookup("add_smiley_sticker").unwrap().param("scale").unwrap();
        assert!(scale.validate(&ParamValue::Number(25.0)).is_ok());
        assert!(scale.validate(&ParamValue::Number(50.0)).is_ok());
        let err = scale.validate(&ParamValue::Number(7.0)).unwrap_err();
        assert!(err.contains("multiple of 5"));

        let opacity = param("opacity");
        assert!(opacity.validate(&ParamValue::Number(0.8)).is_ok());
        assert!(opacity.validate(&ParamValue::Number(0.75)).is_err());
    }

    #[test]
    fn color_requires_hex_form() {
        let color = param("color");
        assert!(color.validate(&ParamValue::Color("#fff".into())).is_ok());
        assert!(color.validate(&ParamValue::Color("#A1b2C3".into())).is_ok());
        assert!(color.validate(&ParamValue::Color("white".into())).is_err());
        assert!(color.validate(&ParamValue::Color("#12345".into())).is_err());
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let err = param("opacity").validate(&ParamValue::Text("high".into())).unwrap_err();
        assert!(err.contains("range"));
    }

    #[test]
    fn single_line_text_rejects_newlines() {
        let text = param("watermark_text");
        assert!(text.validate(&ParamValue::Text("a\nb".into())).is_err());

        let custom = lookup("custom_edit").unwrap().param("custom_instruction").unwrap();
        assert!(custom.validate(&ParamValue::Text("a\nb".into())).is_ok());
    }

    #[test]
    fn choice_parse_accepts_label_and_stores_value() {
        let position = param("watermark_type");
        assert_eq!(
            position.parse_value("text watermark").unwrap(),
            ParamValue::Text("simple text".into())
        );
        assert_eq!(
            position.parse_value("official stamp").unwrap(),
            ParamValue::Text("official stamp".into())
        );
        assert!(position.parse_value("sticker").is_err());
    }

    #[test]
    fn range_parse_reads_decimal() {
        assert_eq!(param("opacity").parse_value(" 0.7 ").unwrap(), ParamValue::Number(0.7));
        assert!(param("opacity").parse_value("lots").is_err());
    }

    #[test]
    fn defaults_are_valid_for_their_kind() {
        for template in TEMPLATES {
            for def in template.params {
                assert!(
                    def.validate(&def.default_value()).is_ok(),
                    "default of {}.{} is inconsistent",
                    template.id,
                    def.id
                );
            }
        }
    }
}

use std::collections::BTreeMap;
use std::fmt;

use super::Template;

/// A concrete parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Number(f64),
    /// Color in its stored string form, e.g. `#c45a7a`.
    Color(String),
}

impl ParamValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParamValue::Text(_) => "text",
            ParamValue::Number(_) => "number",
            ParamValue::Color(_) => "color",
        }
    }
}

impl fmt::Display for ParamValue {
    /// Locale-invariant textual form used in instructions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(text) | ParamValue::Color(text) => f.write_str(text),
            ParamValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Parameter values for one active template, keyed by parameter id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamValues {
    values: BTreeMap<String, ParamValue>,
}

impl ParamValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed every parameter with its schema default.
    pub fn defaults_for(template: &Template) -> Self {
        let values = template.params.iter().map(|p| (p.id.to_string(), p.default_value())).collect();
        Self { values }
    }

    pub fn get(&self, id: &str) -> Option<&ParamValue> {
        self.values.get(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, value: ParamValue) -> Option<ParamValue> {
        self.values.insert(id.into(), value)
    }

    pub fn remove(&mut self, id: &str) -> Option<ParamValue> {
        self.values.remove(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

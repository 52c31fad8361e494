// src/presentation/http/validation.rs
use std::fmt;

/// One rejected request field, rendered as `"<Field> is <tag>[ <param>]"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    field: &'static str,
    tag: &'static str,
    param: Option<String>,
}

impl FieldViolation {
    pub fn new(field: &'static str, tag: &'static str) -> Self {
        Self {
            field,
            tag,
            param: None,
        }
    }

    pub fn with_param(field: &'static str, tag: &'static str, param: impl ToString) -> Self {
        Self {
            field,
            tag,
            param: Some(param.to_string()),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}", self.field, self.tag)?;
        if let Some(param) = &self.param {
            write!(f, " {param}")?;
        }
        Ok(())
    }
}

/// Structural checks run on a request body before the handler sees it.
pub trait Validate {
    fn validate(&self) -> Vec<FieldViolation>;
}

/// Collects violations field by field. Each field stops at its first failed
/// rule.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required_text(&mut self, field: &'static str, value: Option<&str>) -> bool {
        if value.is_none_or(str::is_empty) {
            self.0.push(FieldViolation::new(field, "required"));
            return false;
        }
        true
    }

    pub fn required_positive(&mut self, field: &'static str, value: Option<i64>) -> bool {
        match value {
            None | Some(0) => {
                self.0.push(FieldViolation::new(field, "required"));
                false
            }
            Some(v) if v < 0 => {
                self.0.push(FieldViolation::with_param(field, "gt", 0));
                false
            }
            Some(_) => true,
        }
    }

    pub fn max_chars(&mut self, field: &'static str, value: Option<&str>, max: usize) -> bool {
        if value.is_some_and(|v| v.chars().count() > max) {
            self.0.push(FieldViolation::with_param(field, "max", max));
            return false;
        }
        true
    }

    pub fn into_vec(self) -> Vec<FieldViolation> {
        self.0
    }
}

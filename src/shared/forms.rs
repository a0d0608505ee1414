// src/shared/forms.rs
use std::collections::BTreeMap;

use serde::Serialize;

/// Key for errors that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "__all__";

pub const REQUIRED_MESSAGE: &str = "This field is required.";

//
// ──────────────────────────────────────────────────────────
// Form Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("form has {} invalid field(s)", .0.len())]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Field Cleaning
// ──────────────────────────────────────────────────────────
//

/// Trims the value and records a "required" error when nothing is left.
pub fn clean_required(errors: &mut FormErrors, field: &str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED_MESSAGE);
    }
    value.to_string()
}

pub fn check_max_length(errors: &mut FormErrors, field: &str, value: &str, max: usize) {
    let length = value.chars().count();
    if length > max {
        errors.add(
            field,
            format!("Ensure this value has at most {max} characters (it has {length})."),
        );
    }
}

/// HTML checkboxes submit "on" (or any value) when ticked and nothing otherwise.
pub fn checkbox(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        None => false,
        Some(v) => !matches!(v.as_str(), "" | "false" | "0" | "off"),
    }
}

//
// ──────────────────────────────────────────────────────────
// Form Context
// ──────────────────────────────────────────────────────────
//

/// What a template receives under the `form` key.
#[derive(Debug, Clone, Serialize)]
pub struct FormContext<D: Serialize> {
    pub data: D,
    pub errors: FormErrors,
    pub is_bound: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<serde_json::Value>,
}

impl<D: Serialize> FormContext<D> {
    pub fn unbound(data: D) -> Self {
        Self {
            data,
            errors: FormErrors::new(),
            is_bound: false,
            choices: None,
        }
    }

    pub fn bound(data: D, errors: FormErrors) -> Self {
        Self {
            data,
            errors,
            is_bound: true,
            choices: None,
        }
    }

    pub fn with_choices(mut self, choices: impl Serialize) -> Self {
        self.choices = serde_json::to_value(choices).ok();
        self
    }
}

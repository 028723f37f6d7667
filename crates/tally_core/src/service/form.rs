//! Live form draft tracking.
//!
//! # Responsibility
//! - Hold raw, uncommitted text for each declared form field.
//! - Provide last-write-wins updates, full reset and read snapshots.
//!
//! # Invariants
//! - Only declared fields exist; every field starts as the empty string.
//! - No validation happens here.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Form controller errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Field name is not declared by this form.
    UnknownField(String),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "unknown form field: `{name}`"),
        }
    }
}

impl Error for FormError {}

/// Read-only copy of the draft at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSnapshot {
    values: BTreeMap<&'static str, String>,
}

impl FormSnapshot {
    /// Returns the raw value for `field`, or `""` when not declared.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Iterates `(field, value)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(name, v)| (*name, v.as_str()))
    }

    /// True when every field is the empty string.
    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }
}

impl<const N: usize> From<[(&'static str, &str); N]> for FormSnapshot {
    fn from(pairs: [(&'static str, &str); N]) -> Self {
        Self {
            values: pairs
                .into_iter()
                .map(|(name, value)| (name, value.to_string()))
                .collect(),
        }
    }
}

/// Holds the current values of one multi-field form.
#[derive(Debug, Clone)]
pub struct FormInputController {
    values: BTreeMap<&'static str, String>,
}

impl FormInputController {
    /// Creates a controller for `fields`, all initialized to `""`.
    pub fn new(fields: &'static [&'static str]) -> Self {
        let values = fields.iter().map(|name| (*name, String::new())).collect();
        Self { values }
    }

    /// Replaces the value of `name`; other fields are untouched.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(FormError::UnknownField(name.to_string())),
        }
    }

    /// Restores every field to `""`.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values.clone(),
        }
    }
}

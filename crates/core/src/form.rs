//! Form validation helpers and the field error bag.
//!
//! Create/edit drawers submit a flat field set. Failures are reported per
//! field as `{field: message}` so the front-end can render each message
//! beneath the matching control. Only the first message per field is kept.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length for short text fields (names, statuses).
pub const MAX_NAME_LEN: u64 = 255;

/// Maximum length for free-form notes.
pub const MAX_NOTES_LEN: u64 = 5000;

/// Field-keyed validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field` unless one is already present.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(())` when empty, otherwise [`CoreError::InvalidFields`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(self))
        }
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut bag = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            let field = field.to_string();
            if let Some(first) = field_errors.first() {
                let message = describe(&field, first);
                bag.add(field, message);
            }
        }
        bag
    }
}

/// Run the `validator` derive rules for a form and collect a field bag.
pub fn validate_form<T: Validate>(form: &T) -> FieldErrors {
    match form.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => FieldErrors::from(&errors),
    }
}

/// Custom rule: reject strings that are empty after trimming.
///
/// Used together with `required` so that a submitted `""` is treated the
/// same as a missing field.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("This field is required.".into());
        return Err(err);
    }
    Ok(())
}

/// Custom rule: reject negative and non-finite amounts.
pub fn non_negative(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        let mut err = ValidationError::new("range");
        err.message = Some("Amount must be a number.".into());
        return Err(err);
    }
    if value < 0.0 {
        let mut err = ValidationError::new("range");
        err.message = Some("Amount cannot be negative.".into());
        return Err(err);
    }
    Ok(())
}

/// Deserialize an optional text input, trimming it and mapping blank
/// strings to `None`.
///
/// Use with `#[serde(default, deserialize_with = "...")]`.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Deserialize an optional id from a select control: a number, a numeric
/// string, or `""`/`null` for "nothing selected".
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(DbId),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawId::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("'{s}' is not a valid id"))),
    }
}

/// Deserialize an optional amount: a number, a numeric string (`"12.50"`),
/// or `""`/`null` for "left blank".
pub fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    match Option::<RawAmount>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawAmount::Number(amount)) => Ok(Some(amount)),
        Some(RawAmount::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawAmount::Text(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("'{s}' is not a valid amount"))),
    }
}

fn describe(field: &str, err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }
    let label = field.replace('_', " ");
    match err.code.as_ref() {
        "required" => format!("The {label} field is required."),
        "length" => format!("The {label} field is too long."),
        "range" => format!("The {label} field is out of range."),
        _ => format!("The {label} field is invalid."),
    }
}

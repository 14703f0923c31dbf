//! Submission validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;

/// Sentinel stored when no phone number was supplied.
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

/// Loose email shape: something@something.something, no whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Raw, untrusted form submission.
///
/// Fields deserialize as loose JSON values so that a missing or
/// wrongly-typed field surfaces as a validation error rather than a
/// body-parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
}

impl SubmissionRequest {
    /// Convenience constructor for string fields.
    pub fn new(name: &str, email: &str, phone: Option<&str>) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            email: Some(Value::String(email.into())),
            phone: phone.map(|p| Value::String(p.into())),
        }
    }
}

/// A submission that passed validation.
///
/// Only `validate` constructs one; the fields are private so the
/// guarantees (trimmed name ≥ 2 chars, email shape, phone sentinel) hold
/// everywhere downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    name: String,
    email: String,
    phone: String,
}

impl ValidatedSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Trimmed phone number, or `"Not provided"`.
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// Apply the validation rules in order; the first failure wins.
///
/// 1. `name` must be a string whose trimmed length is at least 2.
/// 2. `email` must be a string matching the loose email shape.
/// 3. `phone`, if present, must be a string. Absent, empty, or
///    whitespace-only normalizes to the `"Not provided"` sentinel.
///
/// Trimming is the only normalization. No side effects.
pub fn validate(raw: &SubmissionRequest) -> Result<ValidatedSubmission, ValidationError> {
    let name = raw
        .name
        .as_ref()
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    if name.chars().count() < 2 {
        return Err(ValidationError::InvalidName);
    }

    let email = raw
        .email
        .as_ref()
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let phone = match raw.phone.as_ref() {
        None | Some(Value::Null) => "",
        Some(Value::String(p)) => p.trim(),
        Some(_) => return Err(ValidationError::InvalidPhone),
    };
    let phone = if phone.is_empty() {
        PHONE_NOT_PROVIDED.to_string()
    } else {
        phone.to_string()
    };

    Ok(ValidatedSubmission {
        name: name.to_string(),
        email: email.to_string(),
        phone,
    })
}

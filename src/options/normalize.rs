//! Normalizers: raw value + option type -> typed value or validation failure
//!
//! Every normalizer is pure. Invalid input never panics; it is reported as a
//! [`ValidationError`] whose message is shown to the user verbatim, either
//! inline under a wizard prompt or after the offending command-line flag.

use std::path::PathBuf;

use thiserror::Error;

use super::schema::{Choice, OptionSpec, OptionType};
use super::value::{OptionValue, RawValue};

/// A raw value rejected by a normalizer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Normalize a raw value according to the option's declared type and choices
pub fn normalize(spec: &OptionSpec, raw: &RawValue) -> Result<OptionValue, ValidationError> {
    match spec.kind {
        OptionType::Boolean => {
            let value = OptionValue::Bool(boolean(raw)?);
            match &spec.choices {
                Some(choices) => member_of(value, choices),
                None => Ok(value),
            }
        }
        OptionType::Choice => choice(raw, spec.choices.as_deref().unwrap_or_default()),
        OptionType::FilePath => match raw {
            RawValue::Text(text) => file_path(text).map(OptionValue::Path),
            RawValue::Flag(_) => Err(ValidationError::new("A file path is required.")),
        },
        OptionType::Text => Ok(OptionValue::Text(raw.to_string())),
    }
}

/// Accepts typed flags as-is and the usual spellings of yes/no as text
pub fn boolean(raw: &RawValue) -> Result<bool, ValidationError> {
    let text = match raw {
        RawValue::Flag(b) => return Ok(*b),
        RawValue::Text(text) => text.trim().to_ascii_lowercase(),
    };

    match text.as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(ValidationError::new("Must be true or false.")),
    }
}

/// Matches the raw value against the string form of each choice value
pub fn choice(raw: &RawValue, choices: &[Choice]) -> Result<OptionValue, ValidationError> {
    let candidate = match raw {
        RawValue::Text(text) => text.trim().to_string(),
        RawValue::Flag(b) => b.to_string(),
    };

    choices
        .iter()
        .find(|c| c.value.to_string() == candidate)
        .map(|c| c.value.clone())
        .ok_or_else(|| not_a_choice(choices))
}

/// Strips whitespace and one pair of surrounding quotes (terminals add them
/// when a file is dragged in), then rejects empty and folder-looking paths.
pub fn file_path(raw: &str) -> Result<PathBuf, ValidationError> {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed)
        .trim();

    if unquoted.is_empty() {
        return Err(ValidationError::new("A file path is required."));
    }
    if unquoted.ends_with('/') || unquoted.ends_with(std::path::MAIN_SEPARATOR) {
        return Err(ValidationError::new(
            "Path must point to a file, not a folder.",
        ));
    }

    Ok(PathBuf::from(unquoted))
}

fn member_of(value: OptionValue, choices: &[Choice]) -> Result<OptionValue, ValidationError> {
    if choices.iter().any(|c| c.value == value) {
        Ok(value)
    } else {
        Err(not_a_choice(choices))
    }
}

fn not_a_choice(choices: &[Choice]) -> ValidationError {
    let allowed: Vec<String> = choices.iter().map(|c| c.value.to_string()).collect();
    ValidationError::new(format!("Allowed choices are {}.", allowed.join(", ")))
}

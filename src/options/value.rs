//! Raw and typed option values

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A fully normalized option value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
    Path(PathBuf),
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&PathBuf> {
        match self {
            OptionValue::Path(p) => Some(p),
            _ => None,
        }
    }

    /// The raw form an argument source would fabricate for this value
    pub fn to_raw(&self) -> RawValue {
        match self {
            OptionValue::Bool(b) => RawValue::Flag(*b),
            other => RawValue::Text(other.to_string()),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Text(s) => write!(f, "{}", s),
            OptionValue::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

/// A value as supplied by an argument source, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Flag(b)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Text(s) => write!(f, "{}", s),
            RawValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// Identifier used as the resolved configuration key (`post-folders` -> `post_folders`)
pub fn option_key(name: &str) -> String {
    name.replace('-', "_")
}

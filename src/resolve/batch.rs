//! Batch pass: resolve what the command line already decided
//!
//! With the wizard enabled only explicitly supplied options are kept; the rest
//! are left for the wizard to ask about. With the wizard disabled every option
//! is resolved here, falling back to its schema default.

use std::collections::HashMap;

use tracing::debug;

use super::config::ResolvedConfig;
use super::error::ResolveError;
use crate::options::normalize::{boolean, normalize, ValidationError};
use crate::options::{OptionSchema, OptionSpec, RawValue};

/// A raw value plus whether the user actually supplied it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub value: RawValue,
    /// False when the value is the schema default standing in for nothing
    pub explicit: bool,
}

impl RawEntry {
    pub fn explicit(value: impl Into<RawValue>) -> Self {
        Self {
            value: value.into(),
            explicit: true,
        }
    }

    /// The stand-in an argument source reports for an option nobody supplied
    pub fn fabricated(spec: &OptionSpec) -> Self {
        Self {
            value: spec.default.to_raw(),
            explicit: false,
        }
    }
}

/// Raw per-option values for one invocation, keyed by option name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    entries: HashMap<String, RawEntry>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every option fabricated from its schema default
    pub fn from_defaults(schema: &OptionSchema) -> Self {
        let mut input = Self::new();
        for spec in schema.iter() {
            input.insert(spec.name, RawEntry::fabricated(spec));
        }
        input
    }

    /// Builder-style helper marking `name` as supplied by the user
    pub fn with_explicit(mut self, name: &str, value: impl Into<RawValue>) -> Self {
        self.insert(name, RawEntry::explicit(value));
        self
    }

    pub fn insert(&mut self, name: &str, entry: RawEntry) {
        self.entries.insert(name.to_string(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&RawEntry> {
        self.entries.get(name)
    }

    fn entry_for(&self, spec: &OptionSpec) -> RawEntry {
        self.get(spec.name)
            .cloned()
            .unwrap_or_else(|| RawEntry::fabricated(spec))
    }
}

/// Supplier of raw option values (the command line, a test fixture, ...)
pub trait ArgSource {
    /// One entry per option in `schema`
    fn raw_input(&self, schema: &OptionSchema) -> RawInput;
}

impl ArgSource for RawInput {
    fn raw_input(&self, schema: &OptionSchema) -> RawInput {
        let mut input = RawInput::new();
        for spec in schema.iter() {
            input.insert(spec.name, self.entry_for(spec));
        }
        input
    }
}

/// Result of the batch pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Whether the wizard should run
    pub wizard: bool,
    /// Complete when `wizard` is false, explicit options only otherwise
    pub config: ResolvedConfig,
}

pub fn resolve_batch(
    schema: &OptionSchema,
    input: &RawInput,
) -> Result<BatchOutcome, ResolveError> {
    let wizard_spec = schema.wizard();
    let wizard_entry = input.entry_for(wizard_spec);
    let wizard = boolean(&wizard_entry.value)
        .map_err(|e| invalid_argument(wizard_spec, &wizard_entry.value, e))?;

    let mut config = ResolvedConfig::new();
    for spec in schema.configurable() {
        let entry = input.entry_for(spec);

        if wizard && !entry.explicit {
            debug!(option = spec.name, "deferred to wizard");
            continue;
        }

        let value = normalize(spec, &entry.value)
            .map_err(|e| invalid_argument(spec, &entry.value, e))?;
        debug!(option = spec.name, explicit = entry.explicit, %value, "resolved from arguments");
        config.insert(spec.name, value);
    }

    Ok(BatchOutcome { wizard, config })
}

fn invalid_argument(spec: &OptionSpec, raw: &RawValue, error: ValidationError) -> ResolveError {
    ResolveError::InvalidArgument {
        name: spec.name.to_string(),
        kind: spec.kind,
        value: raw.to_string(),
        reason: error.message,
    }
}

//! The resolved option map handed to the conversion logic

use std::collections::BTreeMap;

use serde::Serialize;

use crate::options::{option_key, OptionSchema, OptionSpec, OptionValue};

/// Option identifier (snake_case) -> typed value
///
/// Built by the batch pass and the wizard pass separately, then merged once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    values: BTreeMap<String, OptionValue>,
}

impl ResolvedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: &str, value: OptionValue) {
        self.values.insert(option_key(name), value);
    }

    /// Look up by option name (`post-folders`) or identifier (`post_folders`)
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(&option_key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(&option_key(name))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Combine with a later pass; entries in `answers` win
    pub fn merge(mut self, answers: ResolvedConfig) -> ResolvedConfig {
        self.values.extend(answers.values);
        self
    }

    /// Configurable options of `schema` that have no value yet, in schema order
    pub fn missing<'s>(&self, schema: &'s OptionSchema) -> Vec<&'s OptionSpec> {
        schema
            .configurable()
            .filter(|spec| !self.contains(spec.name))
            .collect()
    }
}

impl<'a> FromIterator<(&'a str, OptionValue)> for ResolvedConfig {
    fn from_iter<I: IntoIterator<Item = (&'a str, OptionValue)>>(iter: I) -> Self {
        let mut config = ResolvedConfig::new();
        for (name, value) in iter {
            config.insert(name, value);
        }
        config
    }
}

//! Declarative option table driving both the command line and the wizard

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use super::normalize::normalize;
use super::value::OptionValue;

/// Name of the option that gates the interactive wizard
pub const WIZARD_OPTION: &str = "wizard";

/// Domain of an option, selecting its normalizer and its prompt style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Boolean,
    Choice,
    FilePath,
    /// Free text, accepted unchanged
    Text,
}

impl OptionType {
    /// Tag shown in help output and error messages (`--input <file-path>`)
    pub fn tag(&self) -> &'static str {
        match self {
            OptionType::Boolean => "boolean",
            OptionType::Choice => "choice",
            OptionType::FilePath => "file-path",
            OptionType::Text => "string",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One selectable answer for an enumerable option
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: &'static str,
    pub value: OptionValue,
    /// Example text shown next to the label in the wizard
    pub description: Option<&'static str>,
}

impl Choice {
    pub fn new(label: &'static str, value: OptionValue) -> Self {
        Self {
            label,
            value,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    /// Kebab-case name, used as the flag name and lookup key
    pub name: &'static str,
    pub kind: OptionType,
    pub description: &'static str,
    pub default: OptionValue,
    pub choices: Option<Vec<Choice>>,
}

impl OptionSpec {
    pub fn new(
        name: &'static str,
        kind: OptionType,
        description: &'static str,
        default: OptionValue,
    ) -> Self {
        Self {
            name,
            kind,
            description,
            default,
            choices: None,
        }
    }

    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = Some(choices);
        self
    }

    pub fn is_wizard(&self) -> bool {
        self.name == WIZARD_OPTION
    }

    /// Question shown by the wizard
    pub fn prompt(&self) -> String {
        format!("{}?", self.description)
    }

    /// Position of the default among the choices, if this option has any
    pub fn default_choice_index(&self) -> Option<usize> {
        self.choices
            .as_ref()?
            .iter()
            .position(|c| c.value == self.default)
    }
}

/// Programmer errors in a schema definition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("option '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("option '{0}' is a choice option but declares no choices")]
    MissingChoices(String),

    #[error("default of option '{name}' ({default}) is not one of its choices")]
    DefaultNotInChoices { name: String, default: String },

    #[error("default of option '{name}' is invalid: {reason}")]
    InvalidDefault { name: String, reason: String },

    #[error("schema has no 'wizard' option")]
    MissingWizard,

    #[error("the 'wizard' option must be a boolean")]
    WizardNotBoolean,
}

/// Ordered, validated set of options
#[derive(Debug, Clone)]
pub struct OptionSchema {
    options: Vec<OptionSpec>,
}

impl OptionSchema {
    /// Validate and wrap an ordered list of options
    pub fn new(options: Vec<OptionSpec>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for spec in &options {
            if !seen.insert(spec.name) {
                return Err(SchemaError::DuplicateName(spec.name.to_string()));
            }
            check_option(spec)?;
        }

        match options.iter().find(|o| o.is_wizard()) {
            None => return Err(SchemaError::MissingWizard),
            Some(wizard) if wizard.kind != OptionType::Boolean => {
                return Err(SchemaError::WizardNotBoolean)
            }
            Some(_) => {}
        }

        Ok(Self { options })
    }

    /// The converter's options, in command-line and wizard order
    pub fn builtin() -> Result<Self, SchemaError> {
        Self::new(builtin_options())
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.iter()
    }

    /// Every option except the wizard toggle, in declaration order
    pub fn configurable(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.iter().filter(|o| !o.is_wizard())
    }

    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    pub fn wizard(&self) -> &OptionSpec {
        // Presence is checked in `new`
        self.options
            .iter()
            .find(|o| o.is_wizard())
            .unwrap_or_else(|| unreachable!("schema validated without a wizard option"))
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

fn check_option(spec: &OptionSpec) -> Result<(), SchemaError> {
    if spec.kind == OptionType::Choice && spec.choices.as_ref().map_or(true, |c| c.is_empty()) {
        return Err(SchemaError::MissingChoices(spec.name.to_string()));
    }

    if let Some(choices) = &spec.choices {
        if !choices.iter().any(|c| c.value == spec.default) {
            return Err(SchemaError::DefaultNotInChoices {
                name: spec.name.to_string(),
                default: spec.default.to_string(),
            });
        }
    }

    let normalized =
        normalize(spec, &spec.default.to_raw()).map_err(|e| SchemaError::InvalidDefault {
            name: spec.name.to_string(),
            reason: e.message,
        })?;

    // Defaults are stored already normalized so the batch pass returns them verbatim
    if normalized != spec.default {
        return Err(SchemaError::InvalidDefault {
            name: spec.name.to_string(),
            reason: format!("not in normalized form, expected '{}'", normalized),
        });
    }

    Ok(())
}

fn yes_no(yes_example: &'static str, no_example: &'static str) -> Vec<Choice> {
    let mut yes = Choice::new("Yes", OptionValue::Bool(true));
    let mut no = Choice::new("No", OptionValue::Bool(false));
    if !yes_example.is_empty() {
        yes = yes.with_description(yes_example);
    }
    if !no_example.is_empty() {
        no = no.with_description(no_example);
    }
    vec![yes, no]
}

fn text(s: &str) -> OptionValue {
    OptionValue::Text(s.to_string())
}

fn builtin_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::new(
            WIZARD_OPTION,
            OptionType::Boolean,
            "Use wizard",
            OptionValue::Bool(true),
        ),
        OptionSpec::new(
            "input",
            OptionType::FilePath,
            "Path to WordPress export file",
            OptionValue::Path("export.xml".into()),
        ),
        OptionSpec::new(
            "post-folders",
            OptionType::Boolean,
            "Put each post into its own folder",
            OptionValue::Bool(true),
        )
        .with_choices(yes_no("/my-post/index.md", "/my-post.md")),
        OptionSpec::new(
            "prefix-date",
            OptionType::Boolean,
            "Prefix with date",
            OptionValue::Bool(false),
        )
        .with_choices(yes_no("", "")),
        OptionSpec::new(
            "date-folders",
            OptionType::Choice,
            "Organize into folders based on date",
            text("none"),
        )
        .with_choices(vec![
            Choice::new("Year folders", text("year")),
            Choice::new("Year and month folders", text("year-month")),
            Choice::new("No", text("none")),
        ]),
        OptionSpec::new(
            "save-images",
            OptionType::Choice,
            "Save images",
            text("all"),
        )
        .with_choices(vec![
            Choice::new("Images attached to posts", text("attached")),
            Choice::new("Images scraped from post body content", text("scraped")),
            Choice::new("Both", text("all")),
            Choice::new("No", text("none")),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> OptionSpec {
        OptionSpec::new(WIZARD_OPTION, OptionType::Boolean, "Use wizard", OptionValue::Bool(true))
    }

    #[test]
    fn test_builtin_schema_is_valid() {
        let schema = OptionSchema::builtin().unwrap();
        let names: Vec<&str> = schema.iter().map(|o| o.name).collect();
        assert_eq!(
            names,
            vec!["wizard", "input", "post-folders", "prefix-date", "date-folders", "save-images"]
        );
    }

    #[test]
    fn test_builtin_defaults_are_among_choices() {
        let schema = OptionSchema::builtin().unwrap();
        for spec in schema.iter().filter(|o| o.choices.is_some()) {
            assert!(
                spec.default_choice_index().is_some(),
                "default of '{}' should be one of its choices",
                spec.name
            );
        }
    }

    #[test]
    fn test_configurable_skips_wizard() {
        let schema = OptionSchema::builtin().unwrap();
        assert!(schema.configurable().all(|o| o.name != WIZARD_OPTION));
        assert_eq!(schema.configurable().count(), schema.len() - 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = OptionSchema::new(vec![wizard(), wizard()]);
        assert_eq!(
            result.unwrap_err(),
            SchemaError::DuplicateName("wizard".to_string())
        );
    }

    #[test]
    fn test_default_outside_choices_rejected() {
        let bad = OptionSpec::new("mode", OptionType::Choice, "Mode", text("fast"))
            .with_choices(vec![Choice::new("Slow", text("slow"))]);
        let result = OptionSchema::new(vec![wizard(), bad]);
        assert!(matches!(
            result,
            Err(SchemaError::DefaultNotInChoices { ref name, .. }) if name == "mode"
        ));
    }

    #[test]
    fn test_choice_without_choices_rejected() {
        let bad = OptionSpec::new("mode", OptionType::Choice, "Mode", text("fast"));
        assert_eq!(
            OptionSchema::new(vec![wizard(), bad]).unwrap_err(),
            SchemaError::MissingChoices("mode".to_string())
        );
    }

    #[test]
    fn test_invalid_default_rejected() {
        let bad =
            OptionSpec::new("input", OptionType::FilePath, "Input", OptionValue::Path("".into()));
        assert!(matches!(
            OptionSchema::new(vec![wizard(), bad]),
            Err(SchemaError::InvalidDefault { .. })
        ));
    }

    #[test]
    fn test_default_must_be_normalized() {
        let spelled = OptionSpec::new("verbose", OptionType::Boolean, "Verbose", text("yes"));
        assert!(matches!(
            OptionSchema::new(vec![wizard(), spelled]),
            Err(SchemaError::InvalidDefault { ref name, .. }) if name == "verbose"
        ));

        let quoted = OptionSpec::new(
            "input",
            OptionType::FilePath,
            "Input",
            OptionValue::Path("'export.xml'".into()),
        );
        assert!(matches!(
            OptionSchema::new(vec![wizard(), quoted]),
            Err(SchemaError::InvalidDefault { ref name, .. }) if name == "input"
        ));
    }

    #[test]
    fn test_wizard_option_required() {
        assert_eq!(OptionSchema::new(vec![]).unwrap_err(), SchemaError::MissingWizard);

        let not_bool = OptionSpec::new(WIZARD_OPTION, OptionType::Text, "Use wizard", text("yes"));
        assert_eq!(
            OptionSchema::new(vec![not_bool]).unwrap_err(),
            SchemaError::WizardNotBoolean
        );
    }

    #[test]
    fn test_prompt_appends_question_mark() {
        let schema = OptionSchema::builtin().unwrap();
        assert_eq!(schema.get("save-images").unwrap().prompt(), "Save images?");
    }
}

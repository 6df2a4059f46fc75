//! Wizard pass: ask for every option the command line left open
//!
//! Questions are asked one at a time in schema order. Options with choices
//! become selection lists, everything else a free-text prompt validated by the
//! option's normalizer. Cancelling at any question discards all answers.

use anyhow::Result;
use tracing::{debug, info, warn};

use super::config::ResolvedConfig;
use super::error::ResolveError;
use crate::options::{normalize, Choice, OptionSchema, OptionSpec, OptionValue, RawValue};

/// Outcome of a single prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult<T> {
    Answered(T),
    /// The user quit the wizard
    Cancelled,
}

/// Whether the orchestrator is about to run the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    Starting,
    Skipped,
}

/// Pick one entry of a fixed list
pub struct SelectQuestion<'a> {
    pub name: &'a str,
    pub message: String,
    pub choices: &'a [Choice],
    /// Index into `choices` highlighted initially
    pub default: usize,
}

/// Free-text answer, checked by `validate` before it is accepted
pub struct TextQuestion<'a> {
    pub name: &'a str,
    pub message: String,
    pub default: String,
    pub validate: &'a dyn Fn(&str) -> Result<(), String>,
}

/// Renders questions and collects answers
pub trait PromptEngine {
    /// Called once per resolution, before any question is asked
    fn announce(&mut self, _phase: WizardPhase) {}

    /// Returns the index of the selected choice
    fn select(&mut self, question: &SelectQuestion<'_>) -> Result<PromptResult<usize>>;

    /// Must keep re-displaying the prompt until `question.validate` accepts
    fn input(&mut self, question: &TextQuestion<'_>) -> Result<PromptResult<String>>;
}

/// Options the wizard will ask about, in the order it asks them
pub fn pending_questions<'s>(
    schema: &'s OptionSchema,
    partial: &ResolvedConfig,
) -> Vec<&'s OptionSpec> {
    partial.missing(schema)
}

/// Ask every pending question; answers cover exactly the asked options
pub fn run_wizard(
    schema: &OptionSchema,
    partial: &ResolvedConfig,
    prompts: &mut dyn PromptEngine,
) -> Result<PromptResult<ResolvedConfig>, ResolveError> {
    let mut answers = ResolvedConfig::new();

    for spec in pending_questions(schema, partial) {
        let answer = match &spec.choices {
            Some(choices) => ask_choice(spec, choices, prompts)?,
            None => ask_text(spec, prompts)?,
        };

        match answer {
            PromptResult::Answered(value) => {
                debug!(option = spec.name, %value, "answered");
                answers.insert(spec.name, value);
            }
            PromptResult::Cancelled => {
                info!(option = spec.name, "wizard cancelled");
                return Ok(PromptResult::Cancelled);
            }
        }
    }

    Ok(PromptResult::Answered(answers))
}

fn ask_choice(
    spec: &OptionSpec,
    choices: &[Choice],
    prompts: &mut dyn PromptEngine,
) -> Result<PromptResult<OptionValue>, ResolveError> {
    let question = SelectQuestion {
        name: spec.name,
        message: spec.prompt(),
        choices,
        default: spec.default_choice_index().unwrap_or(0),
    };

    match prompts.select(&question)? {
        PromptResult::Answered(index) => choices
            .get(index)
            .map(|c| PromptResult::Answered(c.value.clone()))
            .ok_or_else(|| ResolveError::ChoiceOutOfRange {
                name: spec.name.to_string(),
                index,
            }),
        PromptResult::Cancelled => Ok(PromptResult::Cancelled),
    }
}

fn ask_text(
    spec: &OptionSpec,
    prompts: &mut dyn PromptEngine,
) -> Result<PromptResult<OptionValue>, ResolveError> {
    let validate = |text: &str| {
        normalize(spec, &RawValue::Text(text.to_string()))
            .map(|_| ())
            .map_err(|e| e.message)
    };
    let question = TextQuestion {
        name: spec.name,
        message: spec.prompt(),
        default: spec.default.to_string(),
        validate: &validate,
    };

    loop {
        let text = match prompts.input(&question)? {
            PromptResult::Answered(text) => text,
            PromptResult::Cancelled => return Ok(PromptResult::Cancelled),
        };

        // The stored value is the normalized one, never the raw text
        match normalize(spec, &RawValue::Text(text)) {
            Ok(value) => return Ok(PromptResult::Answered(value)),
            Err(e) => warn!(option = spec.name, reason = %e, "answer rejected, asking again"),
        }
    }
}

//! Shared test utilities: a scripted prompt engine and schema fixtures

#![allow(dead_code)]

use std::collections::VecDeque;

use anyhow::{bail, Result};
use wp2md::options::OptionSchema;
use wp2md::resolve::{
    PromptEngine, PromptResult, RawInput, SelectQuestion, TextQuestion, WizardPhase,
};

/// One scripted user action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Type this text into a free-text prompt
    Type(&'static str),
    /// Pick the choice at this index
    Pick(usize),
    /// Accept whatever the prompt offers as default
    Enter,
    /// Quit the wizard
    Quit,
}

/// Prompt engine replaying a fixed script and recording what was shown
///
/// Like a real terminal prompt, free-text answers are checked with the
/// question's validator and a rejected answer re-displays the same prompt.
pub struct ScriptedPrompter {
    script: VecDeque<Step>,
    /// Name of the option behind every prompt displayed, in order
    pub shown: Vec<String>,
    /// (option, message) for every rejected free-text answer
    pub rejected: Vec<(String, String)>,
    /// Every phase announced by the orchestrator
    pub phases: Vec<WizardPhase>,
    inline_validation: bool,
}

impl ScriptedPrompter {
    pub fn new(script: impl IntoIterator<Item = Step>) -> Self {
        Self {
            script: script.into_iter().collect(),
            shown: Vec::new(),
            rejected: Vec::new(),
            phases: Vec::new(),
            inline_validation: true,
        }
    }

    /// An engine that hands back free text without running the validator
    pub fn without_inline_validation(mut self) -> Self {
        self.inline_validation = false;
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn next_step(&mut self, name: &str) -> Result<Step> {
        match self.script.pop_front() {
            Some(step) => Ok(step),
            None => bail!("script exhausted while asking '{}'", name),
        }
    }
}

impl PromptEngine for ScriptedPrompter {
    fn announce(&mut self, phase: WizardPhase) {
        self.phases.push(phase);
    }

    fn select(&mut self, question: &SelectQuestion<'_>) -> Result<PromptResult<usize>> {
        self.shown.push(question.name.to_string());
        match self.next_step(question.name)? {
            Step::Pick(index) => Ok(PromptResult::Answered(index)),
            Step::Enter => Ok(PromptResult::Answered(question.default)),
            Step::Quit => Ok(PromptResult::Cancelled),
            Step::Type(text) => bail!("typed '{}' into selection '{}'", text, question.name),
        }
    }

    fn input(&mut self, question: &TextQuestion<'_>) -> Result<PromptResult<String>> {
        loop {
            self.shown.push(question.name.to_string());
            let text = match self.next_step(question.name)? {
                Step::Type(text) => text.to_string(),
                Step::Enter => question.default.clone(),
                Step::Quit => return Ok(PromptResult::Cancelled),
                Step::Pick(index) => bail!("picked {} in text prompt '{}'", index, question.name),
            };

            if !self.inline_validation {
                return Ok(PromptResult::Answered(text));
            }
            match (question.validate)(&text) {
                Ok(()) => return Ok(PromptResult::Answered(text)),
                Err(message) => self.rejected.push((question.name.to_string(), message)),
            }
        }
    }
}

pub fn builtin_schema() -> OptionSchema {
    OptionSchema::builtin().expect("built-in schema should be valid")
}

/// Raw input with every option defaulted, then the given explicit overrides
pub fn raw_input(explicit: &[(&str, &str)]) -> RawInput {
    explicit
        .iter()
        .fold(RawInput::from_defaults(&builtin_schema()), |input, (name, value)| {
            input.with_explicit(name, *value)
        })
}

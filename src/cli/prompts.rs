//! Interactive prompts using dialoguer

use std::io;

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::options::Choice;
use crate::resolve::{PromptEngine, PromptResult, SelectQuestion, TextQuestion, WizardPhase};
use crate::utils::print_info;

/// Grey `?` while a question is open, green check once it is answered
pub fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("?".to_string()).for_stderr().black().bright(),
        success_prefix: style("✓".to_string()).for_stderr().green(),
        ..ColorfulTheme::default()
    }
}

/// Prompt engine drawing on the terminal's stderr
pub struct TerminalPrompter {
    term: Term,
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: prompt_theme(),
        }
    }

    /// Ctrl-C and Esc end the wizard instead of killing the process
    fn finish<T>(&self, result: dialoguer::Result<Option<T>>) -> Result<PromptResult<T>> {
        match result {
            Ok(Some(value)) => Ok(PromptResult::Answered(value)),
            Ok(None) => Ok(PromptResult::Cancelled),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
                self.term.show_cursor()?;
                Ok(PromptResult::Cancelled)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptEngine for TerminalPrompter {
    fn announce(&mut self, phase: WizardPhase) {
        match phase {
            WizardPhase::Starting => print_info("Starting wizard..."),
            WizardPhase::Skipped => print_info("Skipping wizard..."),
        }
    }

    fn select(&mut self, question: &SelectQuestion<'_>) -> Result<PromptResult<usize>> {
        let items: Vec<String> = question.choices.iter().map(choice_item).collect();

        let picked = Select::with_theme(&self.theme)
            .with_prompt(question.message.as_str())
            .items(&items)
            .default(question.default)
            .interact_on_opt(&self.term);

        self.finish(picked)
    }

    fn input(&mut self, question: &TextQuestion<'_>) -> Result<PromptResult<String>> {
        let validate = question.validate;

        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(question.message.as_str())
            .default(question.default.clone())
            .validate_with(|text: &String| validate(text.as_str()))
            .interact_text_on(&self.term)
            .map(Some);

        self.finish(answer)
    }
}

/// Label followed by the dimmed example text, if any
fn choice_item(choice: &Choice) -> String {
    match choice.description {
        Some(example) => format!(
            "{} {}",
            choice.label,
            style(format!("example: {}", example)).for_stderr().dim()
        ),
        None => choice.label.to_string(),
    }
}

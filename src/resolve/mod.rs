//! Resolution engine - batch pass, optional wizard pass, single merge

mod batch;
mod config;
mod error;
mod wizard;

pub use batch::{resolve_batch, ArgSource, BatchOutcome, RawEntry, RawInput};
pub use config::ResolvedConfig;
pub use error::ResolveError;
pub use wizard::{
    pending_questions, run_wizard, PromptEngine, PromptResult, SelectQuestion, TextQuestion,
    WizardPhase,
};

use tracing::info;

use crate::options::OptionSchema;

/// Final outcome of resolving an invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Every configurable option has exactly one valid value
    Resolved(ResolvedConfig),
    /// The user quit the wizard; nothing should run
    Cancelled,
}

/// Resolve the effective configuration from the argument source and, when the
/// `wizard` option is on, the prompt engine.
pub fn resolve_config(
    schema: &OptionSchema,
    source: &dyn ArgSource,
    prompts: &mut dyn PromptEngine,
) -> Result<Resolution, ResolveError> {
    let raw = source.raw_input(schema);
    let batch = resolve_batch(schema, &raw)?;

    let config = if batch.wizard {
        prompts.announce(WizardPhase::Starting);
        info!(explicit = batch.config.len(), "starting wizard");
        match run_wizard(schema, &batch.config, prompts)? {
            PromptResult::Answered(answers) => batch.config.merge(answers),
            PromptResult::Cancelled => return Ok(Resolution::Cancelled),
        }
    } else {
        prompts.announce(WizardPhase::Skipped);
        info!("skipping wizard");
        batch.config
    };

    if let Some(spec) = config.missing(schema).first() {
        return Err(ResolveError::Incomplete(spec.name.to_string()));
    }

    Ok(Resolution::Resolved(config))
}

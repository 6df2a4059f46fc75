//! Errors raised while resolving a configuration

use thiserror::Error;

use crate::options::OptionType;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// A command-line (or environment) value failed its normalizer
    #[error("option '--{name} <{kind}>' argument '{value}' is invalid. {reason}")]
    InvalidArgument {
        name: String,
        kind: OptionType,
        value: String,
        reason: String,
    },

    /// A prompt engine picked an index outside the offered choices
    #[error("choice {index} is out of range for option '{name}'")]
    ChoiceOutOfRange { name: String, index: usize },

    #[error("option '{0}' was not resolved")]
    Incomplete(String),

    /// The prompt engine itself failed (terminal gone, I/O error)
    #[error(transparent)]
    Prompt(#[from] anyhow::Error),
}

//! CLI module - argument parsing and interactive prompts

mod args;
mod prompts;

pub use args::{build_command, env_var, ClapArgSource, ENV_PREFIX};
pub use prompts::{prompt_theme, TerminalPrompter};

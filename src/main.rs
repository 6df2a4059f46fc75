//! wp2md: WordPress export to markdown CLI
//!
//! Resolves the conversion options from the command line and, unless
//! `--wizard false` is given, an interactive wizard.

use std::process;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use wp2md::cli::{ClapArgSource, TerminalPrompter};
use wp2md::options::OptionSchema;
use wp2md::resolve::{resolve_config, Resolution};
use wp2md::settings::ExportSettings;
use wp2md::utils::{print_config, print_error, print_notice, print_success};

/// Environment variable holding the diagnostic log filter
const LOG_ENV: &str = "WP2MD_LOG";

fn main() {
    init_logging();

    if let Err(e) = run() {
        print_error(e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let schema = OptionSchema::builtin()?;
    let source = ClapArgSource::parse(&schema);
    let mut prompts = TerminalPrompter::new();

    let resolution = resolve_config(&schema, &source, &mut prompts)?;
    if let Some(settings) = conclude(&schema, resolution)? {
        tracing::debug!(settings = %serde_json::to_string(&settings)?, "configuration resolved");
    }

    Ok(())
}

/// Report the outcome; `None` when the user quit, which is not an error
fn conclude(schema: &OptionSchema, resolution: Resolution) -> Result<Option<ExportSettings>> {
    let config = match resolution {
        Resolution::Resolved(config) => config,
        Resolution::Cancelled => {
            print_notice("User quit wizard early.");
            return Ok(None);
        }
    };

    let settings = ExportSettings::try_from(&config)?;
    print_config(schema, &config);
    print_success("Configuration resolved");

    Ok(Some(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wp2md::options::OptionValue;
    use wp2md::resolve::ResolvedConfig;
    use wp2md::settings::{DateFolders, SaveImages};

    #[test]
    fn test_cancelled_resolution_is_not_an_error() {
        let schema = OptionSchema::builtin().unwrap();
        let outcome = conclude(&schema, Resolution::Cancelled).unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn test_resolved_config_becomes_settings() {
        let schema = OptionSchema::builtin().unwrap();
        let config: ResolvedConfig = schema
            .configurable()
            .map(|spec| (spec.name, spec.default.clone()))
            .collect();

        let settings = conclude(&schema, Resolution::Resolved(config)).unwrap().unwrap();
        assert_eq!(settings.date_folders, DateFolders::None);
        assert_eq!(settings.save_images, SaveImages::All);
    }

    #[test]
    fn test_incomplete_config_is_an_error() {
        let schema = OptionSchema::builtin().unwrap();
        let config: ResolvedConfig =
            [("post-folders", OptionValue::Bool(true))].into_iter().collect();

        assert!(conclude(&schema, Resolution::Resolved(config)).is_err());
    }
}

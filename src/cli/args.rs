//! Command-line surface built from the option schema using clap

use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::options::{option_key, OptionSchema, OptionSpec, RawValue};
use crate::resolve::{ArgSource, RawEntry, RawInput};

/// Prefix of the environment variables mirroring each option
pub const ENV_PREFIX: &str = "WP2MD_";

const DOCS_URL: &str = "https://github.com/lonekorean/wordpress-export-to-markdown";

/// Environment variable for an option (`save-images` -> `WP2MD_SAVE_IMAGES`)
pub fn env_var(name: &str) -> String {
    format!("{}{}", ENV_PREFIX, option_key(name).to_ascii_uppercase())
}

/// One `--<name> <type>` flag per option, in schema order
pub fn build_command(schema: &OptionSchema) -> Command {
    let command = Command::new("wp2md")
        .about("Convert a WordPress export file to markdown")
        .version(env!("CARGO_PKG_VERSION"))
        .disable_help_flag(true)
        // A repeated flag keeps its last value
        .args_override_self(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::Help)
                .help("See the thing you're looking at right now"),
        )
        .after_help(format!("More documentation is at {}", DOCS_URL));

    schema
        .iter()
        .fold(command, |command, spec| command.arg(option_arg(spec)))
}

fn option_arg(spec: &OptionSpec) -> Arg {
    let mut help = spec.description.to_string();
    if let Some(choices) = &spec.choices {
        let values: Vec<String> = choices.iter().map(|c| c.value.to_string()).collect();
        help.push_str(&format!(" [possible values: {}]", values.join(", ")));
    }

    // Validation happens in the batch pass so every bad value gets the same message
    Arg::new(spec.name)
        .long(spec.name)
        .value_name(spec.kind.tag())
        .help(help)
        .env(env_var(spec.name))
        .default_value(spec.default.to_string())
        .action(ArgAction::Set)
}

/// Raw values from parsed arguments, with clap's value source as provenance
#[derive(Debug, Clone)]
pub struct ClapArgSource {
    matches: ArgMatches,
}

impl ClapArgSource {
    pub fn new(matches: ArgMatches) -> Self {
        Self { matches }
    }

    /// Parse the process arguments, exiting on `--help` or malformed input
    pub fn parse(schema: &OptionSchema) -> Self {
        Self::new(build_command(schema).get_matches())
    }

    pub fn try_parse_from<I, T>(schema: &OptionSchema, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        build_command(schema).try_get_matches_from(args).map(Self::new)
    }
}

impl ArgSource for ClapArgSource {
    fn raw_input(&self, schema: &OptionSchema) -> RawInput {
        let mut input = RawInput::new();
        for spec in schema.iter() {
            let entry = match self.matches.get_one::<String>(spec.name) {
                Some(value) => RawEntry {
                    value: RawValue::Text(value.clone()),
                    explicit: is_user_supplied(self.matches.value_source(spec.name)),
                },
                None => RawEntry::fabricated(spec),
            };
            input.insert(spec.name, entry);
        }
        input
    }
}

fn is_user_supplied(source: Option<ValueSource>) -> bool {
    matches!(
        source,
        Some(ValueSource::CommandLine) | Some(ValueSource::EnvVariable)
    )
}

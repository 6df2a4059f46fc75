//! Terminal styling utilities for status lines and the configuration summary

use std::fmt::Display;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::{style, Emoji};

use crate::options::{OptionSchema, OptionSpec, OptionValue};
use crate::resolve::ResolvedConfig;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WAVE: Emoji<'_, '_> = Emoji("👋 ", "");
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");

/// Print an info message
pub fn print_info(message: &str) {
    println!();
    println!("    {} {}", INFO, message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an informational notice that ends the run without an error
pub fn print_notice(message: &str) {
    println!();
    println!("    {}{}", WAVE, style(message).yellow());
}

/// Print an error to stderr as `error: <message>`
pub fn print_error(error: impl Display) {
    eprintln!("{}: {}", style("error").for_stderr().red().bold(), error);
}

/// Print the resolved options as a table, in schema order
pub fn print_config(schema: &OptionSchema, config: &ResolvedConfig) {
    println!();
    println!(
        "    {}{}",
        GEAR,
        style("CONFIGURATION").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Option").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    for spec in schema.configurable() {
        let Some(value) = config.get(spec.name) else {
            continue;
        };
        let color = if *value == spec.default {
            Color::White
        } else {
            Color::Cyan
        };
        table.add_row(vec![
            Cell::new(format!("--{}", spec.name)),
            Cell::new(truncate_string(&display_value(spec, value), 48)).fg(color),
        ]);
    }

    // Indent the table
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Choice label with the raw value, or just the value for free-form options
fn display_value(spec: &OptionSpec, value: &OptionValue) -> String {
    spec.choices
        .as_ref()
        .and_then(|choices| choices.iter().find(|c| c.value == *value))
        .map(|c| format!("{} ({})", c.label, value))
        .unwrap_or_else(|| value.to_string())
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}

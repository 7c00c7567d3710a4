//! `format-number`: the site's number display, offline.

use prostory_core::format::format_number;
use serde_json::Value;

use crate::cli::{FormatNumberArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Bare words are strings; anything JSON accepts keeps its JSON type.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

pub fn handle(args: &FormatNumberArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let formatted = format_number(&parse_value(&args.value));
    output::print_output(&formatted, global.quiet);
    Ok(())
}

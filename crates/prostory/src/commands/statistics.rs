//! Landing page statistics handler.

use prostory_core::format::format_number;
use prostory_core::models::Statistic;
use serde_json::Value;
use tabled::Tabled;

use crate::error::CliError;
use crate::output;

use super::Context;

#[derive(Tabled)]
struct StatisticRow {
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Statistic> for StatisticRow {
    fn from(s: &Statistic) -> Self {
        Self {
            number: display_number(&s.number),
            label: s.label.clone(),
            description: s.description.clone().unwrap_or_default(),
        }
    }
}

/// Group digits when the figure is numeric; keep free text (`50+`) as is.
fn display_number(raw: &str) -> String {
    let formatted = format_number(&Value::String(raw.to_owned()));
    if formatted == prostory_core::format::NOT_A_NUMBER {
        raw.to_owned()
    } else {
        formatted
    }
}

pub async fn handle(ctx: &Context<'_>) -> Result<(), CliError> {
    let stats = ctx.require(ctx.pass.statistics().await, "statistic", "statistics")?;
    let out = output::render_list(
        &ctx.global.output,
        &stats,
        |s| StatisticRow::from(s),
        |s| format!("{}\t{}", s.number, s.label),
    )?;
    ctx.emit(&out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_figures_are_kept() {
        assert_eq!(display_number("1500"), "1\u{a0}500");
        assert_eq!(display_number("50+"), "50+");
    }
}

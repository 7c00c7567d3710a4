//! Landing page render pass report.

use prostory_core::{FetchStatus, FetchSummary, HomePage, Phase, RenderPass};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::PrefetchArgs;
use crate::error::CliError;
use crate::output;

use super::Context;

#[derive(Serialize)]
struct SummaryEntry {
    key: String,
    status: String,
    items: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<&FetchSummary> for SummaryEntry {
    fn from(s: &FetchSummary) -> Self {
        Self {
            key: s.key.clone(),
            status: status_label(s.status).into(),
            items: s.items,
            error: s.error.clone(),
        }
    }
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Items")]
    items: usize,
    #[tabled(rename = "Error")]
    error: String,
}

impl From<&SummaryEntry> for SummaryRow {
    fn from(e: &SummaryEntry) -> Self {
        Self {
            key: e.key.clone(),
            status: e.status.clone(),
            items: e.items,
            error: e.error.clone().unwrap_or_default(),
        }
    }
}

fn status_label(status: FetchStatus) -> &'static str {
    match status {
        FetchStatus::Idle => "deferred",
        FetchStatus::Success => "ok",
        FetchStatus::Error => "error",
    }
}

pub async fn handle(ctx: &Context<'_>, args: PrefetchArgs) -> Result<(), CliError> {
    let phase = if args.client {
        Phase::Client
    } else {
        Phase::Server
    };
    let pass = RenderPass::new(ctx.pass.gateway().clone(), phase)
        .with_hooks(ctx.pass.hooks().clone());

    let page = HomePage::load(&pass).await;
    tracing::debug!(
        phase = ?pass.phase(),
        requests = pass.cache().len(),
        "render pass finished"
    );

    let entries: Vec<SummaryEntry> = page.summary().iter().map(SummaryEntry::from).collect();
    let out = output::render_list(
        &ctx.global.output,
        &entries,
        |e| SummaryRow::from(e),
        |e| format!("{}\t{}", e.key, e.status),
    )?;
    ctx.emit(&out);
    Ok(())
}

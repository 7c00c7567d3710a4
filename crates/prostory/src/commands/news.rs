//! News command handlers.

use chrono::{DateTime, Utc};
use prostory_core::ResourceId;
use prostory_core::models::{NewsArticle, NewsSummary};
use tabled::Tabled;

use crate::cli::{NewsArgs, NewsCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

#[derive(Tabled)]
struct NewsRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Title")]
    title: String,
}

impl From<&NewsSummary> for NewsRow {
    fn from(n: &NewsSummary) -> Self {
        Self {
            id: n.id.to_string(),
            published: date(n.published_at.as_ref()),
            title: n.title.clone(),
        }
    }
}

fn date(at: Option<&DateTime<Utc>>) -> String {
    at.map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_default()
}

fn article_detail(a: &NewsArticle, color: bool) -> String {
    let mut out = output::detail(
        &[
            ("ID", a.id.to_string()),
            ("Title", a.title.clone()),
            ("Published", date(a.published_at.as_ref())),
            (
                "Reading",
                a.reading_time.map(|m| format!("{m} мин")).unwrap_or_default(),
            ),
        ],
        color,
    );
    if let Some(content) = a.content.as_deref().filter(|c| !c.is_empty()) {
        out.push_str("\n\n");
        out.push_str(content);
    }
    out
}

pub async fn handle(ctx: &Context<'_>, args: NewsArgs) -> Result<(), CliError> {
    let format = &ctx.global.output;
    match args.command {
        NewsCommand::List => {
            let news = ctx.require(ctx.pass.news().await, "article", "news list")?;
            let out = output::render_list(format, &news, |x| NewsRow::from(x), |n| n.id.to_string())?;
            ctx.emit(&out);
            Ok(())
        }

        NewsCommand::Get { id } => {
            let id = ResourceId::from(id);
            let article = ctx.require_item(ctx.pass.news_item(&id).await, "article", "news list")?;
            let color = ctx.color();
            let out = output::render_single(
                format,
                &article,
                |a| article_detail(a, color),
                |a| a.id.to_string(),
            )?;
            ctx.emit(&out);
            Ok(())
        }
    }
}

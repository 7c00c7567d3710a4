//! Activity command handlers.

use prostory_core::models::Activity;
use prostory_core::{ActivityFilter, ResourceId};
use tabled::Tabled;

use crate::cli::{ActivitiesArgs, ActivitiesCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Season")]
    season: String,
}

impl From<&Activity> for ActivityRow {
    fn from(a: &Activity) -> Self {
        Self {
            id: a.id.to_string(),
            title: a.title.clone(),
            category: a
                .category_display
                .clone()
                .or_else(|| a.category.clone())
                .unwrap_or_default(),
            season: a
                .season_display
                .clone()
                .or_else(|| a.season.clone())
                .unwrap_or_default(),
        }
    }
}

pub async fn handle(ctx: &Context<'_>, args: ActivitiesArgs) -> Result<(), CliError> {
    let format = &ctx.global.output;
    match args.command {
        ActivitiesCommand::List {
            category,
            season,
            ordering,
        } => {
            let filter = ActivityFilter {
                category,
                season,
                ordering,
            };
            let activities = ctx.require(
                ctx.pass.activities(&filter).await,
                "activity",
                "activities list",
            )?;
            let out =
                output::render_list(format, &activities, |x| ActivityRow::from(x), |a| a.id.to_string())?;
            ctx.emit(&out);
            Ok(())
        }

        ActivitiesCommand::Get { id } => {
            let id = ResourceId::from(id);
            let activity =
                ctx.require_item(ctx.pass.activity(&id).await, "activity", "activities list")?;
            let color = ctx.color();
            let out = output::render_single(
                format,
                &activity,
                |a| {
                    let row = ActivityRow::from(a);
                    output::detail(
                        &[
                            ("ID", row.id),
                            ("Title", row.title),
                            ("Category", row.category),
                            ("Season", row.season),
                            ("Video", a.video_url.clone().unwrap_or_default()),
                            ("About", a.description.clone().unwrap_or_default()),
                        ],
                        color,
                    )
                },
                |a| a.id.to_string(),
            )?;
            ctx.emit(&out);
            Ok(())
        }
    }
}

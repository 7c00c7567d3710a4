//! Event type command handlers.

use prostory_core::ResourceId;
use prostory_core::models::EventType;
use tabled::Tabled;

use crate::cli::{EventsArgs, EventsCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

#[derive(Tabled)]
struct EventTypeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Slug")]
    slug: String,
}

impl From<&EventType> for EventTypeRow {
    fn from(e: &EventType) -> Self {
        Self {
            id: e.id.to_string(),
            title: e.title.clone(),
            slug: e.slug.clone().unwrap_or_default(),
        }
    }
}

pub async fn handle(ctx: &Context<'_>, args: EventsArgs) -> Result<(), CliError> {
    let format = &ctx.global.output;
    match args.command {
        EventsCommand::List => {
            let types = ctx.require(ctx.pass.event_types().await, "event type", "events list")?;
            let out =
                output::render_list(format, &types, |x| EventTypeRow::from(x), |e| e.id.to_string())?;
            ctx.emit(&out);
            Ok(())
        }

        EventsCommand::Get { id } => {
            let id = ResourceId::from(id);
            let event =
                ctx.require_item(ctx.pass.event_type(&id).await, "event type", "events list")?;
            let color = ctx.color();
            let out = output::render_single(
                format,
                &event,
                |e| {
                    output::detail(
                        &[
                            ("ID", e.id.to_string()),
                            ("Title", e.title.clone()),
                            ("Slug", e.slug.clone().unwrap_or_default()),
                            ("About", e.description.clone().unwrap_or_default()),
                        ],
                        color,
                    )
                },
                |e| e.id.to_string(),
            )?;
            ctx.emit(&out);
            Ok(())
        }
    }
}

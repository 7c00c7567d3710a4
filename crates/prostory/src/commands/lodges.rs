//! Lodge command handlers.

use prostory_core::format::format_whole;
use prostory_core::models::{Lodge, LodgeType};
use prostory_core::{LodgeFilter, ResourceId};
use tabled::Tabled;

use crate::cli::{LodgeListArgs, LodgesArgs, LodgesCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct LodgeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    lodge_type: String,
    #[tabled(rename = "Guests")]
    capacity: String,
    #[tabled(rename = "From, ₽")]
    price_from: String,
}

impl From<&Lodge> for LodgeRow {
    fn from(l: &Lodge) -> Self {
        Self {
            id: l.id.to_string(),
            name: l.name.clone(),
            lodge_type: l.lodge_type_name.clone().unwrap_or_default(),
            capacity: l.capacity.map(|c| c.to_string()).unwrap_or_default(),
            price_from: l.price_from.map(format_whole).unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct LodgeTypeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Lodges")]
    lodges: usize,
}

impl From<&LodgeType> for LodgeTypeRow {
    fn from(t: &LodgeType) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name.clone(),
            slug: t.slug.clone().unwrap_or_default(),
            lodges: t.lodges.len(),
        }
    }
}

fn lodge_detail(l: &Lodge, color: bool) -> String {
    output::detail(
        &[
            ("ID", l.id.to_string()),
            ("Name", l.name.clone()),
            ("Slug", l.slug.clone().unwrap_or_default()),
            ("Type", l.lodge_type_name.clone().unwrap_or_default()),
            ("Guests", l.capacity.map(|c| c.to_string()).unwrap_or_default()),
            ("Area, m²", l.area.map(format_whole).unwrap_or_default()),
            ("From, ₽", l.price_from.map(format_whole).unwrap_or_default()),
            ("Images", l.images.len().to_string()),
            ("Summary", l.short_description.clone().unwrap_or_default()),
        ],
        color,
    )
}

fn filter_from(args: LodgeListArgs) -> LodgeFilter {
    LodgeFilter {
        lodge_type: args.lodge_type,
        price_from_min: args.price_min,
        price_from_max: args.price_max,
        capacity_min: args.capacity_min,
        capacity_max: args.capacity_max,
        ordering: args.ordering,
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &Context<'_>, args: LodgesArgs) -> Result<(), CliError> {
    let format = &ctx.global.output;
    match args.command {
        LodgesCommand::List(list) => {
            let filter = filter_from(list);
            let lodges = ctx.require(ctx.pass.lodges(&filter).await, "lodge", "lodges list")?;
            let out = output::render_list(format, &lodges, |x| LodgeRow::from(x), |l| l.id.to_string())?;
            ctx.emit(&out);
            Ok(())
        }

        LodgesCommand::Get { id } => {
            let id = ResourceId::from(id);
            let lodge = ctx.require_item(ctx.pass.lodge(&id).await, "lodge", "lodges list")?;
            let color = ctx.color();
            let out = output::render_single(
                format,
                &lodge,
                |l| lodge_detail(l, color),
                |l| l.id.to_string(),
            )?;
            ctx.emit(&out);
            Ok(())
        }

        LodgesCommand::Types => {
            let types = ctx.require(ctx.pass.lodge_types().await, "lodge type", "lodges types")?;
            let out =
                output::render_list(format, &types, |x| LodgeTypeRow::from(x), |t| t.id.to_string())?;
            ctx.emit(&out);
            Ok(())
        }
    }
}

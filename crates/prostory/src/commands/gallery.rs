//! Gallery command handlers.

use prostory_core::GalleryFilter;
use prostory_core::models::GalleryImage;
use tabled::Tabled;

use crate::cli::{GalleryArgs, GalleryCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

#[derive(Tabled)]
struct GalleryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Column")]
    column: String,
    #[tabled(rename = "Order")]
    order: i32,
    #[tabled(rename = "Image")]
    image: String,
}

impl From<&GalleryImage> for GalleryRow {
    fn from(g: &GalleryImage) -> Self {
        Self {
            id: g.id.to_string(),
            position: g.position.clone().unwrap_or_default(),
            column: g.column.clone().unwrap_or_default(),
            order: g.order,
            image: g.image_url.clone().unwrap_or_default(),
        }
    }
}

pub async fn handle(ctx: &Context<'_>, args: GalleryArgs) -> Result<(), CliError> {
    match args.command {
        GalleryCommand::List {
            position,
            column,
            ordering,
        } => {
            let filter = GalleryFilter { position, ordering };
            let view = ctx.require(ctx.pass.gallery(&filter).await, "gallery", "gallery list")?;

            let images: Vec<GalleryImage> = match column {
                Some(column) => view.images_by_column(column).into_iter().cloned().collect(),
                None => view.images,
            };

            let out = output::render_list(
                &ctx.global.output,
                &images,
                |g| GalleryRow::from(g),
                |g| g.id.to_string(),
            )?;
            ctx.emit(&out);
            Ok(())
        }
    }
}

//! Hero section handler.

use prostory_core::models::HeroSection;

use crate::error::CliError;
use crate::output;

use super::Context;

fn hero_detail(h: &HeroSection, color: bool) -> String {
    let images = h
        .images
        .iter()
        .filter_map(|i| i.image_url.clone())
        .collect::<Vec<_>>()
        .join("\n");
    output::detail(
        &[
            ("Title", h.title.clone().unwrap_or_default()),
            ("Subtitle", h.subtitle.clone().unwrap_or_default()),
            ("Display", h.display_type.clone().unwrap_or_default()),
            ("Video", h.promo_video_url.clone().unwrap_or_default()),
            ("Images", h.images.len().to_string()),
            ("", images),
        ],
        color,
    )
}

pub async fn handle(ctx: &Context<'_>) -> Result<(), CliError> {
    let hero = ctx.require(ctx.pass.hero().await, "hero section", "hero")?;
    let color = ctx.color();
    let out = output::render_single(
        &ctx.global.output,
        &hero,
        |h| hero_detail(h, color),
        |h| h.title.clone().unwrap_or_default(),
    )?;
    ctx.emit(&out);
    Ok(())
}

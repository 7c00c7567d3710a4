//! sitemap.xml and robots.txt output.

use prostory_core::SitemapSource;
use prostory_core::robots::RobotsPolicy;
use prostory_core::sitemap;

use crate::cli::SitemapArgs;
use crate::error::CliError;

use super::Context;

pub async fn sitemap(ctx: &Context<'_>, args: SitemapArgs) -> Result<(), CliError> {
    let source = if args.backend {
        SitemapSource::Backend
    } else {
        ctx.config.sitemap.source
    };

    let site = ctx.frontend.site_root();
    let xml = sitemap::render(source, ctx.pass.gateway(), &site, &ctx.config.sitemap.routes)
        .await
        .map_err(|err| {
            CliError::from_fetch(err, "sitemap", ctx.api_base(), "sitemap", "sitemap")
        })?;

    ctx.emit(&xml);
    Ok(())
}

pub fn robots(ctx: &Context<'_>) -> Result<(), CliError> {
    let policy = RobotsPolicy::for_site(&ctx.frontend.site_root());
    ctx.emit(policy.render().trim_end());
    Ok(())
}

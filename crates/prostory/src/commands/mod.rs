//! Command dispatch: bridges CLI args -> render pass -> output formatting.

pub mod activities;
pub mod config_cmd;
pub mod events;
pub mod format_number;
pub mod gallery;
pub mod hero;
pub mod lodges;
pub mod news;
pub mod prefetch;
pub mod restaurant;
pub mod seo;
pub mod statistics;

use prostory_core::{AsyncData, FrontendConfig, Gateway, Phase, RenderPass};

use crate::cli::{Command, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Everything a data command needs.
pub struct Context<'a> {
    pub global: &'a GlobalOpts,
    pub config: Config,
    pub frontend: FrontendConfig,
    pub pass: RenderPass,
}

impl<'a> Context<'a> {
    /// Load config and open a client-phase render pass, so deferred
    /// resources are fetched too. The pass logs failures through the
    /// default hooks.
    pub fn build(global: &'a GlobalOpts) -> Result<Self, CliError> {
        let config = config::load(global)?;
        let frontend = config::frontend(&config)?;
        let gateway = Gateway::new(&frontend).map_err(|err| CliError::Validation {
            field: "api_base_url".into(),
            reason: format!("cannot build a client for {}: {err}", frontend.api_base),
        })?;

        let pass = RenderPass::new(gateway, Phase::Client);

        Ok(Self {
            global,
            config,
            frontend,
            pass,
        })
    }

    pub fn api_base(&self) -> &str {
        self.frontend.api_base.as_str()
    }

    pub fn color(&self) -> bool {
        output::should_color(&self.global.color)
    }

    pub fn emit(&self, rendered: &str) {
        output::print_output(rendered, self.global.quiet);
    }

    /// Unwrap fetched data or convert its error.
    pub fn require<T>(
        &self,
        data: AsyncData<T>,
        resource_type: &str,
        list_command: &str,
    ) -> Result<T, CliError> {
        let key = data.key.clone();
        data.into_result().map_err(|err| {
            CliError::from_fetch(err, &key, self.api_base(), resource_type, list_command)
        })
    }

    /// Like [`Context::require`], treating an empty item as not found.
    pub fn require_item<T>(
        &self,
        data: AsyncData<Option<T>>,
        resource_type: &str,
        list_command: &str,
    ) -> Result<T, CliError> {
        let key = data.key.clone();
        self.require(data, resource_type, list_command)?
            .ok_or_else(|| CliError::NotFound {
                resource_type: resource_type.to_owned(),
                identifier: key,
                list_command: list_command.to_owned(),
            })
    }
}

/// Dispatch a data command to the appropriate handler.
pub async fn dispatch(cmd: Command, ctx: &Context<'_>) -> Result<(), CliError> {
    match cmd {
        Command::Lodges(args) => lodges::handle(ctx, args).await,
        Command::Activities(args) => activities::handle(ctx, args).await,
        Command::Events(args) => events::handle(ctx, args).await,
        Command::News(args) => news::handle(ctx, args).await,
        Command::Gallery(args) => gallery::handle(ctx, args).await,
        Command::Hero => hero::handle(ctx).await,
        Command::Restaurant(args) => restaurant::handle(ctx, args).await,
        Command::Statistics => statistics::handle(ctx).await,
        Command::Prefetch(args) => prefetch::handle(ctx, args).await,
        Command::Sitemap(args) => seo::sitemap(ctx, args).await,
        Command::Robots => seo::robots(ctx),
        // Handled before a context is built
        Command::FormatNumber(_) | Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}

//! Config subcommand handlers.

use std::fmt::Write as _;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

fn quoted(s: &str) -> String {
    toml::Value::String(s.to_owned()).to_string()
}

/// Format config for display, masking the secret.
fn format_config_redacted(cfg: &Config) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "api_base_url = {}", quoted(&cfg.api_base_url));
    let _ = writeln!(out, "site_url = {}", quoted(&cfg.site_url));
    if cfg.has_api_secret() {
        let _ = writeln!(out, "api_secret = \"****\"");
    }
    let _ = writeln!(out, "node_env = {}", quoted(&cfg.node_env));
    let _ = writeln!(out, "port = {}", cfg.port);
    let _ = writeln!(out, "timeout = {}", cfg.timeout);
    if let Some(ref ua) = cfg.user_agent {
        let _ = writeln!(out, "user_agent = {}", quoted(ua));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "[site]");
    let _ = writeln!(out, "name = {}", quoted(&cfg.site.name));
    let _ = writeln!(out, "description = {}", quoted(&cfg.site.description));
    let _ = writeln!(out, "locale = {}", quoted(&cfg.site.locale));

    let routes = cfg
        .sitemap
        .routes
        .iter()
        .map(String::as_str)
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out);
    let _ = writeln!(out, "[sitemap]");
    let _ = writeln!(out, "routes = [{routes}]");
    let _ = writeln!(out, "source = {}", quoted(&cfg.sitemap.source.to_string()));

    out.trim_end().to_owned()
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            let out = output::render_single(&global.output, &cfg, format_config_redacted, |_| {
                "config".into()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            let path = config::active_path(global);
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }
    }
}

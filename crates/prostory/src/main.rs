mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::Context;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Offline commands don't touch the backend
        Command::Config(ref args) => commands::config_cmd::handle(args, &cli.global),
        Command::FormatNumber(ref args) => commands::format_number::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(ref args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "prostory", &mut std::io::stdout());
            Ok(())
        }

        // Everything else reads the backend through one render pass
        cmd => {
            let ctx = Context::build(&cli.global)?;
            tracing::debug!(command = ?cmd, api = ctx.api_base(), "dispatching command");
            let result = commands::dispatch(cmd, &ctx).await;
            if let Err(ref err) = result {
                ctx.pass.hooks().app_error(err);
            }
            result
        }
    }
}

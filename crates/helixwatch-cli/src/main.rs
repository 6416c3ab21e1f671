mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod ui;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run_app().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("helixwatch v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let app_config = config::build_config(
        cli.config.as_deref(),
        cli.dssp_binary.as_deref(),
        &cli.set_values,
    )?;
    debug!("Resolved configuration: {:?}", &app_config);

    let command_result = match cli.command {
        Commands::Monitor(args) => {
            info!("Dispatching to 'monitor' command.");
            commands::monitor::run(args, &app_config).await
        }
        Commands::Contest(args) => {
            info!("Dispatching to 'contest' command.");
            commands::contest::run(args, &app_config).await
        }
        Commands::Analyze(args) => {
            info!("Dispatching to 'analyze' command.");
            commands::analyze::run(args, &app_config).await
        }
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    command_result
}

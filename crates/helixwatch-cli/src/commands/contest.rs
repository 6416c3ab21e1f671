use crate::cli::ContestArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::ui::UiManager;
use crate::utils::parser;
use crate::utils::progress::CliProgressHandler;
use helixwatch::engine::extractor::DsspExtractor;
use helixwatch::engine::progress::EventReporter;
use helixwatch::workflows;
use tokio::task;
use tracing::info;

pub async fn run(args: ContestArgs, app_config: &AppConfig) -> Result<()> {
    let end = args
        .end_time
        .as_deref()
        .map(parser::parse_end_time)
        .transpose()
        .map_err(|e| CliError::Argument(e.to_string()))?;
    let config = app_config.contest_config(&args.input_dir, end)?;
    info!(
        "Contest ends at {}.",
        config.clock.end().format("%Y-%m-%d %I:%M%p")
    );

    let ui = UiManager::spawn();
    let handler = CliProgressHandler::new(ui.sender.clone());

    let outcome = task::spawn_blocking(move || {
        let extractor = DsspExtractor::from_config(&config.monitor.dssp);
        let reporter = EventReporter::with_callback(handler.get_callback());
        workflows::contest::run(&config, &extractor, &reporter)
    })
    .await
    .map_err(|e| CliError::Other(anyhow::anyhow!("Contest task failed: {}", e)))?;

    ui.close().await?;

    info!(
        "Contest finished with {} ranked file(s).",
        outcome.helix_length.len()
    );
    Ok(())
}

use crate::cli::MonitorArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::ui::UiManager;
use crate::utils::progress::CliProgressHandler;
use helixwatch::engine::extractor::DsspExtractor;
use helixwatch::engine::progress::EventReporter;
use helixwatch::workflows;
use std::future::Future;
use std::io;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::{signal, task};
use tracing::{info, warn};

const INTERRUPTED_EXIT_CODE: i32 = 130;

pub async fn run(args: MonitorArgs, app_config: &AppConfig) -> Result<()> {
    let config = app_config.monitor_config(&args.input_dir)?;
    info!("Using DSSP binary {:?}.", &config.dssp.binary);

    let ui = UiManager::spawn();
    let handler = CliProgressHandler::new(ui.sender.clone());

    let stop = Arc::new(AtomicBool::new(false));
    let interrupt = {
        let stop = stop.clone();
        task::spawn(async move {
            match handle_interrupts(signal::ctrl_c, &stop).await {
                Ok(()) => {
                    warn!("Second interrupt received, exiting immediately.");
                    process::exit(INTERRUPTED_EXIT_CODE);
                }
                Err(e) => warn!("Unable to listen for Ctrl-C: {}", e),
            }
        })
    };

    let worker_stop = stop.clone();
    let summary = task::spawn_blocking(move || {
        let extractor = DsspExtractor::from_config(&config.dssp);
        let reporter = EventReporter::with_callback(handler.get_callback());
        workflows::monitor::run(&config, &extractor, &reporter, &worker_stop)
    })
    .await
    .map_err(|e| CliError::Other(anyhow::anyhow!("Monitor task failed: {}", e)))?;

    interrupt.abort();
    ui.close().await?;

    info!(
        "Monitor finished: {} analyzed, {} failed.",
        summary.files_analyzed, summary.files_failed
    );
    Ok(())
}

/// Sets `stop` on the first interrupt and returns once a second one arrives.
async fn handle_interrupts<F, Fut>(mut interrupt: F, stop: &AtomicBool) -> io::Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<()>>,
{
    interrupt().await?;
    info!("Interrupt received, stopping after the current file. Press Ctrl-C again to exit now.");
    stop.store(true, Ordering::Relaxed);
    interrupt().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test]
    async fn first_interrupt_sets_stop_and_second_returns() {
        let stop = AtomicBool::new(false);
        let calls = AtomicUsize::new(0);

        let result = handle_interrupts(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                future::ready(Ok(()))
            },
            &stop,
        )
        .await;

        assert!(result.is_ok());
        assert!(stop.load(Ordering::Relaxed));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn listener_failure_leaves_stop_unset() {
        let stop = AtomicBool::new(false);

        let result = handle_interrupts(|| future::ready(Err(io::Error::other("no signals"))), &stop).await;

        assert!(result.is_err());
        assert!(!stop.load(Ordering::Relaxed));
    }

    #[tokio::test]
    async fn failure_while_waiting_for_second_interrupt_keeps_stop_set() {
        let stop = AtomicBool::new(false);
        let mut calls = 0;

        let result = handle_interrupts(
            || {
                calls += 1;
                future::ready(if calls == 1 {
                    Ok(())
                } else {
                    Err(io::Error::other("listener closed"))
                })
            },
            &stop,
        )
        .await;

        assert!(result.is_err());
        assert!(stop.load(Ordering::Relaxed));
    }
}

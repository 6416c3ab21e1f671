use super::analyze::poll_directory;
use super::sleep_unless_stopped;
use crate::engine::config::MonitorConfig;
use crate::engine::extractor::StructureExtractor;
use crate::engine::progress::{EventReporter, MonitorEvent};
use crate::engine::scanner::{DirectoryScanner, KnownFileSet};
use crate::engine::state::MonitorSummary;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, instrument};

/// Polls the input directory until `stop` is set, analyzing each new file as it appears.
#[instrument(skip_all, name = "monitor_workflow")]
pub fn run(
    config: &MonitorConfig,
    extractor: &impl StructureExtractor,
    reporter: &EventReporter,
    stop: &AtomicBool,
) -> MonitorSummary {
    info!(
        "Monitoring {:?} every {:?}.",
        &config.input_dir, config.poll_interval
    );
    reporter.report(MonitorEvent::MonitorStarted {
        input_dir: config.input_dir.clone(),
    });

    let scanner = DirectoryScanner::new(&config.input_dir);
    let mut known = KnownFileSet::new();
    let mut summary = MonitorSummary::default();

    while !stop.load(Ordering::Relaxed) {
        for (_, stats) in poll_directory(&scanner, &mut known, extractor, reporter) {
            match stats {
                Some(_) => summary.files_analyzed += 1,
                None => summary.files_failed += 1,
            }
        }
        sleep_unless_stopped(config.poll_interval, stop);
    }

    info!(
        "Monitor stopped after analyzing {} file(s) ({} failed).",
        summary.files_analyzed, summary.files_failed
    );
    reporter.report(MonitorEvent::MonitorStopped {
        files_analyzed: summary.files_analyzed,
        files_failed: summary.files_failed,
    });
    summary
}

use super::analyze::poll_directory;
use crate::engine::clock::CountdownSchedule;
use crate::engine::config::ContestConfig;
use crate::engine::extractor::StructureExtractor;
use crate::engine::progress::{EventReporter, MonitorEvent};
use crate::engine::scanner::{DirectoryScanner, KnownFileSet};
use crate::engine::state::{ContestOutcome, ContestPhase};
use chrono::Local;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Runs a contest: monitors the input directory until the clock expires, then announces
/// the runner-ups and, after a pause, the champions of both categories.
#[instrument(skip_all, name = "contest_workflow")]
pub fn run(
    config: &ContestConfig,
    extractor: &impl StructureExtractor,
    reporter: &EventReporter,
) -> ContestOutcome {
    let clock = config.clock;
    let monitor = &config.monitor;
    info!(
        "Contest on {:?} runs until {}.",
        &monitor.input_dir,
        clock.end().format("%Y-%m-%d %I:%M:%S%p")
    );

    reporter.report(MonitorEvent::MonitorStarted {
        input_dir: monitor.input_dir.clone(),
    });
    let started = Local::now();
    reporter.report(MonitorEvent::TimeRemaining(clock.time_remaining_at(started)));

    let scanner = DirectoryScanner::new(&monitor.input_dir);
    let mut known = KnownFileSet::new();
    let mut schedule = CountdownSchedule::new(clock, started);
    let mut outcome = ContestOutcome::default();
    let mut phase = ContestPhase::Running;

    while phase.accepts_files() {
        let now = Local::now();
        if clock.is_expired_at(now) {
            phase = phase.next();
            break;
        }
        if let Some(remaining) = schedule.poll(now) {
            reporter.report(MonitorEvent::TimeRemaining(remaining));
        }

        for (path, stats) in poll_directory(&scanner, &mut known, extractor, reporter) {
            let Some(stats) = stats else { continue };
            if let Some(content) = stats.helical_content {
                outcome.helical_content.record(content, path.clone());
            }
            outcome.helix_length.record(stats.longest_helix, path);
        }

        let until_end = (clock.end() - Local::now())
            .to_std()
            .unwrap_or(Duration::ZERO);
        thread::sleep(monitor.poll_interval.min(until_end));
    }

    debug!("Contest phase: {:?}", phase);
    info!(
        "Contest over with {} ranked file(s).",
        outcome.helix_length.len()
    );
    announce(config, &outcome, reporter);
    phase = phase.next();
    debug!("Contest phase: {:?}", phase);

    outcome
}

fn announce(config: &ContestConfig, outcome: &ContestOutcome, reporter: &EventReporter) {
    reporter.report(MonitorEvent::ContestOver {
        suspense: config.suspense,
    });
    thread::sleep(config.suspense);

    reporter.report(MonitorEvent::RunnerUps {
        helix_length: outcome.helix_length.runner_ups(config.podium_size),
        helical_content: outcome.helical_content.runner_ups(config.podium_size),
    });
    thread::sleep(config.suspense);

    reporter.report(MonitorEvent::Champions {
        helix_length: outcome.helix_length.champion(),
        helical_content: outcome.helical_content.champion(),
    });
}

use super::clock::TimeRemaining;
use super::leaderboard::RankedEntry;
use crate::core::helix::HelixStats;
use std::path::PathBuf;
use std::time::Duration;

/// Something a monitor loop wants its caller to know about.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    MonitorStarted { input_dir: PathBuf },
    TimeRemaining(TimeRemaining),

    FileDiscovered { path: PathBuf },
    FileAnalyzed { path: PathBuf, stats: HelixStats },
    FileFailed { path: PathBuf, reason: String },
    DecompressionFailed { path: PathBuf, reason: String },
    ScanFailed { reason: String },

    ContestOver { suspense: Duration },
    RunnerUps {
        helix_length: Vec<RankedEntry<usize>>,
        helical_content: Vec<RankedEntry<f64>>,
    },
    Champions {
        helix_length: Option<RankedEntry<usize>>,
        helical_content: Option<RankedEntry<f64>>,
    },
    MonitorStopped { files_analyzed: usize, files_failed: usize },
}

pub type EventCallback<'a> = Box<dyn Fn(MonitorEvent) + Send + Sync + 'a>;

#[derive(Default)]
pub struct EventReporter<'a> {
    callback: Option<EventCallback<'a>>,
}

impl<'a> EventReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: EventCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: MonitorEvent) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Reporter that records every event for later inspection.
    pub(crate) fn recording_reporter() -> (EventReporter<'static>, Arc<Mutex<Vec<MonitorEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = EventReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));
        (reporter, events)
    }

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = EventReporter::new();
        reporter.report(MonitorEvent::ScanFailed {
            reason: "ignored".into(),
        });
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let (reporter, events) = recording_reporter();
        reporter.report(MonitorEvent::FileDiscovered {
            path: PathBuf::from("a.pdb"),
        });
        reporter.report(MonitorEvent::ContestOver {
            suspense: Duration::from_secs(10),
        });

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], MonitorEvent::FileDiscovered { .. }));
        assert!(matches!(events[1], MonitorEvent::ContestOver { .. }));
    }
}

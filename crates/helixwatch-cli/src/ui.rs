use crate::error::{CliError, Result};
use helixwatch::core::helix::HelixStats;
use helixwatch::core::ordinal::ordinal;
use helixwatch::engine::leaderboard::{RankedEntry, display_name};
use helixwatch::engine::progress::MonitorEvent;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::{self, JoinHandle};

/// Lines printed for one analyzed file.
pub fn render_stats(stats: &HelixStats) -> Vec<String> {
    let content = match stats.helical_content {
        Some(fraction) => format!("Total helical content: {:.2}%", fraction * 100.0),
        None => "Total helical content: n/a (no residues assigned)".to_string(),
    };
    vec![
        format!("Longest helix: {} residues", stats.longest_helix),
        content,
    ]
}

fn helix_length_line(entry: &RankedEntry<usize>) -> String {
    format!(
        "{} place: {}, with a longest helix length of: {}",
        ordinal(entry.rank as u64),
        entry.file_name(),
        entry.metric
    )
}

fn helical_content_line(entry: &RankedEntry<f64>) -> String {
    format!(
        "{} place: {}, with a total helical content of: {:.4}%",
        ordinal(entry.rank as u64),
        entry.file_name(),
        entry.metric * 100.0
    )
}

/// Console lines for a workflow event. An empty string is a blank line.
pub fn render_event(event: &MonitorEvent) -> Vec<String> {
    match event {
        MonitorEvent::MonitorStarted { input_dir } => {
            vec![format!("Watching {} for new structure files", input_dir.display())]
        }
        MonitorEvent::TimeRemaining(remaining) => vec![
            String::new(),
            format!("######## Contest ends in: {} ########", remaining),
        ],
        MonitorEvent::FileDiscovered { path } => {
            vec![String::new(), format!("Found new pdb: {}", display_name(path))]
        }
        MonitorEvent::FileAnalyzed { stats, .. } => render_stats(stats),
        MonitorEvent::FileFailed { path, .. } => vec![
            format!("DSSP failed on {}", path.display()),
            "Check your file if this is yours!".to_string(),
        ],
        MonitorEvent::DecompressionFailed { path, .. } => {
            vec![format!("Failed unzipping file {}", path.display())]
        }
        MonitorEvent::ScanFailed { reason } => vec![format!("Directory scan failed: {}", reason)],
        MonitorEvent::ContestOver { suspense } => vec![
            String::new(),
            format!(
                "Contest over - runner-up results will be shown in {} seconds (for suspense)",
                suspense.as_secs()
            ),
            String::new(),
        ],
        MonitorEvent::RunnerUps {
            helix_length,
            helical_content,
        } => {
            let mut lines = vec![
                "#### CONTEST RESULTS!!!! ####".to_string(),
                "Helix length category runner-ups:".to_string(),
            ];
            lines.extend(helix_length.iter().map(helix_length_line));
            lines.push(String::new());
            lines.push("Helical content category runner-ups:".to_string());
            lines.extend(helical_content.iter().map(helical_content_line));
            lines
        }
        MonitorEvent::Champions {
            helix_length,
            helical_content,
        } => {
            let mut lines = Vec::new();
            if let Some(champion) = helix_length {
                lines.push(String::new());
                lines.push("HELIX LENGTH CHAMPION:".to_string());
                lines.push(champion.path.display().to_string());
                lines.push(helix_length_line(champion));
            }
            if let Some(champion) = helical_content {
                lines.push(String::new());
                lines.push("HELIX CONTENT CHAMPION:".to_string());
                lines.push(champion.path.display().to_string());
                lines.push(helical_content_line(champion));
            }
            lines
        }
        MonitorEvent::MonitorStopped {
            files_analyzed,
            files_failed,
        } => vec![
            String::new(),
            format!(
                "Stopped after analyzing {} file(s) ({} failed).",
                files_analyzed, files_failed
            ),
        ],
    }
}

/// Renders workflow events on the console: result lines on stdout and a
/// spinner on stderr while DSSP is running on a file.
pub struct UiManager {
    mp: MultiProgress,
    spinner: Option<ProgressBar>,
    event_receiver: mpsc::UnboundedReceiver<MonitorEvent>,
    shutdown_receiver: watch::Receiver<bool>,
}

/// Handle to a running [`UiManager`] task.
pub struct UiHandle {
    pub sender: mpsc::UnboundedSender<MonitorEvent>,
    shutdown_sender: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl UiHandle {
    /// Flushes every pending event, then stops the UI task.
    pub async fn close(self) -> Result<()> {
        let _ = self.shutdown_sender.send(true);
        self.task
            .await
            .map_err(|e| CliError::Other(anyhow::anyhow!("UI manager task failed: {}", e)))
    }
}

impl UiManager {
    pub fn new() -> (
        Self,
        mpsc::UnboundedSender<MonitorEvent>,
        watch::Sender<bool>,
    ) {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();
        let (shutdown_sender, shutdown_receiver) = watch::channel(false);
        let mp = MultiProgress::new();
        mp.set_draw_target(ProgressDrawTarget::stderr_with_hz(12));
        let manager = Self {
            mp,
            spinner: None,
            event_receiver,
            shutdown_receiver,
        };
        (manager, event_sender, shutdown_sender)
    }

    pub fn spawn() -> UiHandle {
        let (manager, sender, shutdown_sender) = Self::new();
        UiHandle {
            sender,
            shutdown_sender,
            task: task::spawn(manager.run()),
        }
    }

    pub async fn run(mut self) {
        self.process_events().await;
        self.clear_spinner();
    }

    /// Handles events until shutdown is requested, then drains whatever is still queued.
    async fn process_events(&mut self) {
        loop {
            tokio::select! {
                biased;
                Some(event) = self.event_receiver.recv() => {
                    self.handle_event(event);
                }
                result = self.shutdown_receiver.changed() => {
                    if result.is_err() || *self.shutdown_receiver.borrow() {
                        break;
                    }
                }
            }
        }
        while let Ok(event) = self.event_receiver.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: MonitorEvent) {
        match &event {
            MonitorEvent::FileDiscovered { path } => {
                self.print(&render_event(&event));
                self.start_spinner(format!("Running DSSP on {}...", display_name(path)));
            }
            MonitorEvent::FileAnalyzed { .. } | MonitorEvent::FileFailed { .. } => {
                self.clear_spinner();
                self.print(&render_event(&event));
            }
            _ => self.print(&render_event(&event)),
        }
    }

    fn print(&self, lines: &[String]) {
        self.mp.suspend(|| {
            for line in lines {
                println!("{}", line);
            }
        });
    }

    fn start_spinner(&mut self, message: String) {
        self.clear_spinner();
        let pb = self.mp.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb.set_message(message);
        self.spinner = Some(pb);
    }

    fn clear_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
            self.mp.remove(&pb);
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helixwatch::engine::clock::TimeRemaining;
    use std::path::PathBuf;

    fn setup_manager() -> (UiManager, mpsc::UnboundedSender<MonitorEvent>) {
        let (manager, sender, _) = UiManager::new();
        manager.mp.set_draw_target(ProgressDrawTarget::hidden());
        (manager, sender)
    }

    fn stats(longest: usize, content: Option<f64>) -> HelixStats {
        HelixStats {
            longest_helix: longest,
            helical_content: content,
            helix_residues: 0,
            total_residues: 0,
        }
    }

    fn helix_entry(rank: usize, metric: usize, path: &str) -> RankedEntry<usize> {
        RankedEntry {
            rank,
            metric,
            path: PathBuf::from(path),
        }
    }

    fn content_entry(rank: usize, metric: f64, path: &str) -> RankedEntry<f64> {
        RankedEntry {
            rank,
            metric,
            path: PathBuf::from(path),
        }
    }

    #[test]
    fn renders_discovery_with_base_name() {
        let lines = render_event(&MonitorEvent::FileDiscovered {
            path: PathBuf::from("/contest/team1/b.pdb"),
        });
        assert_eq!(lines, ["", "Found new pdb: b.pdb"]);
    }

    #[test]
    fn renders_stats_as_percentage() {
        let lines = render_event(&MonitorEvent::FileAnalyzed {
            path: PathBuf::from("b.pdb"),
            stats: stats(6, Some(0.6)),
        });
        assert_eq!(
            lines,
            ["Longest helix: 6 residues", "Total helical content: 60.00%"]
        );
    }

    #[test]
    fn renders_missing_content_without_dividing_by_zero() {
        let lines = render_stats(&stats(0, None));
        assert_eq!(lines[0], "Longest helix: 0 residues");
        assert!(lines[1].contains("n/a"));
    }

    #[test]
    fn renders_time_remaining_banner() {
        let lines = render_event(&MonitorEvent::TimeRemaining(TimeRemaining::from_seconds(
            2 * 3600 + 5 * 60,
        )));
        assert_eq!(lines[1], "######## Contest ends in: 2 hours, 5 minutes ########");
    }

    #[test]
    fn renders_contest_over_with_suspense_delay() {
        let lines = render_event(&MonitorEvent::ContestOver {
            suspense: Duration::from_secs(10),
        });
        assert_eq!(
            lines[1],
            "Contest over - runner-up results will be shown in 10 seconds (for suspense)"
        );
    }

    #[test]
    fn renders_runner_ups_with_ordinals_and_percentages() {
        let lines = render_event(&MonitorEvent::RunnerUps {
            helix_length: vec![helix_entry(2, 3, "/contest/a.pdb")],
            helical_content: vec![content_entry(2, 0.15, "/contest/a.pdb")],
        });
        assert_eq!(
            lines,
            [
                "#### CONTEST RESULTS!!!! ####",
                "Helix length category runner-ups:",
                "2nd place: a.pdb, with a longest helix length of: 3",
                "",
                "Helical content category runner-ups:",
                "2nd place: a.pdb, with a total helical content of: 15.0000%",
            ]
        );
    }

    #[test]
    fn renders_champions_with_full_path() {
        let lines = render_event(&MonitorEvent::Champions {
            helix_length: Some(helix_entry(1, 6, "/contest/b.pdb")),
            helical_content: Some(content_entry(1, 0.6, "/contest/b.pdb")),
        });
        assert_eq!(
            lines,
            [
                "",
                "HELIX LENGTH CHAMPION:",
                "/contest/b.pdb",
                "1st place: b.pdb, with a longest helix length of: 6",
                "",
                "HELIX CONTENT CHAMPION:",
                "/contest/b.pdb",
                "1st place: b.pdb, with a total helical content of: 60.0000%",
            ]
        );
    }

    #[test]
    fn empty_boards_render_no_champion_sections() {
        let lines = render_event(&MonitorEvent::Champions {
            helix_length: None,
            helical_content: None,
        });
        assert!(lines.is_empty());
    }

    #[test]
    fn discovery_starts_spinner_and_result_clears_it() {
        let (mut manager, _) = setup_manager();
        manager.handle_event(MonitorEvent::FileDiscovered {
            path: PathBuf::from("/contest/a.pdb"),
        });
        let spinner = manager.spinner.as_ref().unwrap();
        assert_eq!(spinner.message(), "Running DSSP on a.pdb...");

        manager.handle_event(MonitorEvent::FileFailed {
            path: PathBuf::from("/contest/a.pdb"),
            reason: "exit status: 1".into(),
        });
        assert!(manager.spinner.is_none());
    }

    #[test]
    fn new_discovery_replaces_running_spinner() {
        let (mut manager, _) = setup_manager();
        manager.handle_event(MonitorEvent::FileDiscovered {
            path: PathBuf::from("a.pdb"),
        });
        manager.handle_event(MonitorEvent::FileDiscovered {
            path: PathBuf::from("b.pdb"),
        });
        assert_eq!(
            manager.spinner.as_ref().unwrap().message(),
            "Running DSSP on b.pdb..."
        );
    }

    #[tokio::test]
    async fn events_queued_before_shutdown_are_all_handled() {
        let (mut manager, sender, shutdown) = UiManager::new();
        manager.mp.set_draw_target(ProgressDrawTarget::hidden());
        for name in ["a.pdb", "b.pdb"] {
            sender
                .send(MonitorEvent::FileDiscovered {
                    path: PathBuf::from(name),
                })
                .unwrap();
        }
        shutdown.send(true).unwrap();

        manager.process_events().await;

        assert_eq!(
            manager.spinner.as_ref().unwrap().message(),
            "Running DSSP on b.pdb..."
        );
        assert!(manager.event_receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn close_stops_the_task_and_drops_the_receiver() {
        let (manager, sender, shutdown_sender) = UiManager::new();
        manager.mp.set_draw_target(ProgressDrawTarget::hidden());
        sender
            .send(MonitorEvent::FileDiscovered {
                path: PathBuf::from("a.pdb"),
            })
            .unwrap();
        let handle = UiHandle {
            sender: sender.clone(),
            shutdown_sender,
            task: task::spawn(manager.run()),
        };

        handle.close().await.unwrap();

        assert!(sender.is_closed());
    }
}

use crate::error::{CliError, Result};
use chrono::{DateTime, Local};
use helixwatch::engine::clock::ContestClock;
use helixwatch::engine::config::{
    ContestConfig, ContestConfigBuilder, MonitorConfig, MonitorConfigBuilder,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fully resolved settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub dssp_binary: PathBuf,
    pub dssp_timeout: Duration,
    pub poll_interval: Duration,
    pub suspense: Duration,
    pub default_duration: Duration,
    pub podium_size: usize,
}

impl AppConfig {
    pub fn monitor_config(&self, input_dir: &Path) -> Result<MonitorConfig> {
        Ok(MonitorConfigBuilder::new()
            .input_dir(input_dir.to_path_buf())
            .dssp_binary(self.dssp_binary.clone())
            .dssp_timeout(self.dssp_timeout)
            .poll_interval(self.poll_interval)
            .build()?)
    }

    /// Builds a contest ending at `end`, or after the default duration when no end is given.
    pub fn contest_config(
        &self,
        input_dir: &Path,
        end: Option<DateTime<Local>>,
    ) -> Result<ContestConfig> {
        let end = match end {
            Some(end) => end,
            None => ContestClock::ending_in(self.default_duration)
                .map(|clock| clock.end())
                .ok_or_else(|| {
                    CliError::Config("contest.default-duration-secs is out of range".to_string())
                })?,
        };
        Ok(ContestConfigBuilder::new()
            .monitor(self.monitor_config(input_dir)?)
            .end_time(end)
            .suspense(self.suspense)
            .podium_size(self.podium_size)
            .build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use tempfile::tempdir;

    fn app_config() -> AppConfig {
        AppConfig {
            dssp_binary: PathBuf::from("mkdssp"),
            dssp_timeout: Duration::from_secs(120),
            poll_interval: Duration::from_millis(1000),
            suspense: Duration::from_secs(10),
            default_duration: Duration::from_secs(30),
            podium_size: 5,
        }
    }

    #[test]
    fn monitor_config_carries_resolved_settings() {
        let dir = tempdir().unwrap();
        let config = app_config().monitor_config(dir.path()).unwrap();
        assert_eq!(config.input_dir, dir.path());
        assert_eq!(config.dssp.binary, PathBuf::from("mkdssp"));
        assert_eq!(config.poll_interval, Duration::from_secs(1));
    }

    #[test]
    fn monitor_config_rejects_missing_directory() {
        let dir = tempdir().unwrap();
        let result = app_config().monitor_config(&dir.path().join("nope"));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn contest_without_end_time_uses_default_duration() {
        let dir = tempdir().unwrap();
        let before = Local::now();
        let config = app_config().contest_config(dir.path(), None).unwrap();
        assert!(config.clock.end() >= before + TimeDelta::seconds(30));
        assert!(config.clock.end() <= Local::now() + TimeDelta::seconds(30));
        assert_eq!(config.podium_size, 5);
    }

    #[test]
    fn contest_with_past_end_time_is_rejected() {
        let dir = tempdir().unwrap();
        let end = Local::now() - TimeDelta::minutes(1);
        let result = app_config().contest_config(dir.path(), Some(end));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("not in the future")));
    }
}

use super::clock::ContestClock;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Input directory does not exist or is not a directory: {}", path.display())]
    InputDirectory { path: PathBuf },

    #[error("Contest end time {end} is not in the future")]
    EndTimeNotInFuture { end: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DsspConfig {
    pub binary: PathBuf,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    pub input_dir: PathBuf,
    pub dssp: DsspConfig,
    pub poll_interval: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContestConfig {
    pub monitor: MonitorConfig,
    pub clock: ContestClock,
    pub suspense: Duration,
    /// Number of leaderboard places announced, champion included.
    pub podium_size: usize,
}

#[derive(Default)]
pub struct MonitorConfigBuilder {
    input_dir: Option<PathBuf>,
    dssp_binary: Option<PathBuf>,
    dssp_timeout: Option<Duration>,
    poll_interval: Option<Duration>,
}

impl MonitorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_dir(mut self, path: PathBuf) -> Self {
        self.input_dir = Some(path);
        self
    }

    pub fn dssp_binary(mut self, path: PathBuf) -> Self {
        self.dssp_binary = Some(path);
        self
    }

    pub fn dssp_timeout(mut self, timeout: Duration) -> Self {
        self.dssp_timeout = Some(timeout);
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    pub fn build(self) -> Result<MonitorConfig, ConfigError> {
        let input_dir = self
            .input_dir
            .ok_or(ConfigError::MissingParameter("input_dir"))?;
        if !input_dir.is_dir() {
            return Err(ConfigError::InputDirectory { path: input_dir });
        }

        let binary = self
            .dssp_binary
            .ok_or(ConfigError::MissingParameter("dssp_binary"))?;
        if binary.as_os_str().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "dssp_binary",
                reason: "path is empty".to_string(),
            });
        }

        let timeout = self
            .dssp_timeout
            .ok_or(ConfigError::MissingParameter("dssp_timeout"))?;
        if timeout.is_zero() {
            return Err(ConfigError::InvalidParameter {
                name: "dssp_timeout",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(MonitorConfig {
            input_dir,
            dssp: DsspConfig { binary, timeout },
            poll_interval: self
                .poll_interval
                .ok_or(ConfigError::MissingParameter("poll_interval"))?,
        })
    }
}

#[derive(Default)]
pub struct ContestConfigBuilder {
    monitor: Option<MonitorConfig>,
    end_time: Option<DateTime<Local>>,
    suspense: Option<Duration>,
    podium_size: Option<usize>,
}

impl ContestConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn monitor(mut self, config: MonitorConfig) -> Self {
        self.monitor = Some(config);
        self
    }

    pub fn end_time(mut self, end: DateTime<Local>) -> Self {
        self.end_time = Some(end);
        self
    }

    pub fn suspense(mut self, delay: Duration) -> Self {
        self.suspense = Some(delay);
        self
    }

    pub fn podium_size(mut self, size: usize) -> Self {
        self.podium_size = Some(size);
        self
    }

    pub fn build(self) -> Result<ContestConfig, ConfigError> {
        let monitor = self.monitor.ok_or(ConfigError::MissingParameter("monitor"))?;
        let end = self
            .end_time
            .ok_or(ConfigError::MissingParameter("end_time"))?;
        if end <= Local::now() {
            return Err(ConfigError::EndTimeNotInFuture {
                end: end.format("%Y-%m-%d %I:%M:%S%p").to_string(),
            });
        }

        let podium_size = self
            .podium_size
            .ok_or(ConfigError::MissingParameter("podium_size"))?;
        if podium_size == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "podium_size",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(ContestConfig {
            monitor,
            clock: ContestClock::new(end),
            suspense: self
                .suspense
                .ok_or(ConfigError::MissingParameter("suspense"))?,
            podium_size,
        })
    }
}

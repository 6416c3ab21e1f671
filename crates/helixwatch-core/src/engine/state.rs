use super::leaderboard::Leaderboard;

/// Lifecycle of a contest run. Phases only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestPhase {
    /// The clock has not expired; new files are still accepted.
    Running,
    /// The clock has expired; standings are frozen and being announced.
    Finalizing,
    Done,
}

impl ContestPhase {
    pub fn next(self) -> Self {
        match self {
            Self::Running => Self::Finalizing,
            Self::Finalizing | Self::Done => Self::Done,
        }
    }

    pub fn accepts_files(self) -> bool {
        self == Self::Running
    }
}

/// Final standings of a contest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContestOutcome {
    pub helix_length: Leaderboard<usize>,
    pub helical_content: Leaderboard<f64>,
}

/// Counters reported when an unbounded monitor stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorSummary {
    pub files_analyzed: usize,
    pub files_failed: usize,
}

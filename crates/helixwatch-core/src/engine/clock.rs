use chrono::{DateTime, Local, TimeDelta};
use std::fmt;
use std::time::Duration;

const REGULAR_UPDATE_INTERVAL: Duration = Duration::from_secs(5 * 60);
const SHORT_UPDATE_INTERVAL: Duration = Duration::from_secs(15);
const SHORTEST_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

const SHORT_UPDATE_THRESHOLD_SECS: i64 = 2 * 60;
const SHORTEST_UPDATE_THRESHOLD_SECS: i64 = 30;

/// Fixed wall-clock deadline for a contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContestClock {
    end: DateTime<Local>,
}

impl ContestClock {
    pub fn new(end: DateTime<Local>) -> Self {
        Self { end }
    }

    /// A clock ending `duration` from now, or `None` if that instant is not representable.
    pub fn ending_in(duration: Duration) -> Option<Self> {
        let delta = TimeDelta::from_std(duration).ok()?;
        Local::now().checked_add_signed(delta).map(Self::new)
    }

    pub fn end(&self) -> DateTime<Local> {
        self.end
    }

    /// Time left until the deadline; negative once it has passed.
    pub fn remaining_at(&self, now: DateTime<Local>) -> TimeDelta {
        self.end - now
    }

    pub fn is_expired_at(&self, now: DateTime<Local>) -> bool {
        now >= self.end
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Local::now())
    }

    pub fn time_remaining_at(&self, now: DateTime<Local>) -> TimeRemaining {
        TimeRemaining::from_seconds(self.remaining_at(now).num_seconds())
    }

    /// How often the remaining time should be announced at `now`.
    ///
    /// Announcements speed up as the deadline approaches: every five minutes,
    /// then every 15 seconds inside the last two minutes, then every second
    /// inside the last 30 seconds.
    pub fn update_interval_at(&self, now: DateTime<Local>) -> Duration {
        let remaining = self.remaining_at(now);
        if remaining < TimeDelta::seconds(SHORTEST_UPDATE_THRESHOLD_SECS) {
            SHORTEST_UPDATE_INTERVAL
        } else if remaining < TimeDelta::seconds(SHORT_UPDATE_THRESHOLD_SECS) {
            SHORT_UPDATE_INTERVAL
        } else {
            REGULAR_UPDATE_INTERVAL
        }
    }
}

/// Remaining contest time, expressed in the coarsest units that read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRemaining {
    HoursMinutes { hours: i64, minutes: i64 },
    Minutes { minutes: i64 },
    MinutesSeconds { minutes: i64, seconds: i64 },
    Seconds { seconds: i64 },
}

impl TimeRemaining {
    pub fn from_seconds(total_seconds: i64) -> Self {
        let total_seconds = total_seconds.max(0);
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            Self::HoursMinutes { hours, minutes }
        } else if minutes > 5 {
            Self::Minutes { minutes }
        } else if minutes > 0 {
            Self::MinutesSeconds { minutes, seconds }
        } else {
            Self::Seconds { seconds }
        }
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HoursMinutes { hours, minutes } => {
                write!(f, "{} hours, {} minutes", hours, minutes)
            }
            Self::Minutes { minutes } => write!(f, "{} minutes", minutes),
            Self::MinutesSeconds { minutes, seconds } => {
                write!(f, "{} minutes, {} seconds", minutes, seconds)
            }
            Self::Seconds { seconds } => write!(f, "{} seconds", seconds),
        }
    }
}

/// Decides when the next remaining-time announcement is due.
#[derive(Debug, Clone)]
pub struct CountdownSchedule {
    clock: ContestClock,
    last_update: DateTime<Local>,
}

impl CountdownSchedule {
    pub fn new(clock: ContestClock, started_at: DateTime<Local>) -> Self {
        Self {
            clock,
            last_update: started_at,
        }
    }

    /// Returns the time remaining if an announcement is due at `now`, recording it as made.
    pub fn poll(&mut self, now: DateTime<Local>) -> Option<TimeRemaining> {
        let interval = TimeDelta::from_std(self.clock.update_interval_at(now)).ok()?;
        if now - self.last_update > interval {
            self.last_update = now;
            Some(self.clock.time_remaining_at(now))
        } else {
            None
        }
    }
}

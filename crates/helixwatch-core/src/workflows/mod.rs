//! # Workflows Module
//!
//! High-level loops that tie the engine and core together.
//!
//! - **Monitor Workflow** ([`monitor`]) - Polls forever (until stopped), reporting the helix
//!   statistics of each new structure file as soon as it is analyzed.
//! - **Contest Workflow** ([`contest`]) - The same polling bounded by a contest clock, with
//!   an accelerating countdown and a staged announcement of the final standings.
//! - **Single-File Analysis** ([`analyze`]) - The per-file step both loops share, also
//!   usable on its own for one-off analysis.
//!
//! Workflows report everything through an [`EventReporter`](crate::engine::progress::EventReporter)
//! and return structured results; rendering is left to the caller.

pub mod analyze;
pub mod contest;
pub mod monitor;

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

const SLEEP_SLICE: Duration = Duration::from_millis(100);

/// Sleeps for `duration`, returning early once `stop` is set.
pub(crate) fn sleep_unless_stopped(duration: Duration, stop: &AtomicBool) {
    let deadline = Instant::now() + duration;
    while !stop.load(Ordering::Relaxed) {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep((deadline - now).min(SLEEP_SLICE));
    }
}

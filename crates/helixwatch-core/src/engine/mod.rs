//! # Engine Module
//!
//! This module holds the stateful machinery that the monitor loops are built from.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Validated settings for the monitor and contest loops
//! - **Discovery** ([`scanner`]) - Incremental recursive scanning with the known-file set
//! - **Extraction** ([`extractor`]) - DSSP subprocess invocation with a hard timeout
//! - **Timekeeping** ([`clock`]) - The contest deadline and the countdown announcement cadence
//! - **Ranking** ([`leaderboard`]) - Stable descending standings per contest category
//! - **State Tracking** ([`state`]) - Contest phases and final outcomes
//! - **Events** ([`progress`]) - Structured events reported to the presentation layer
//! - **Error Handling** ([`error`]) - Engine-level error aggregation
//!
//! Per-file failures (decompression, extraction) are values, not panics: the loops
//! report them as events and keep going.

pub mod clock;
pub mod config;
pub mod error;
pub mod extractor;
pub mod leaderboard;
pub mod progress;
pub mod scanner;
pub mod state;

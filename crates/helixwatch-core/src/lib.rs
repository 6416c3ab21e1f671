//! # helixwatch Core Library
//!
//! Watches a directory for newly-appearing protein structure files, assigns secondary
//! structure to each with DSSP, and reports helix statistics, either continuously or as
//! a time-boxed contest that ranks every submitted structure when the clock runs out.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`StructureMap`), the pure helix
//!   analysis functions, the DSSP output parser and archive handling.
//!
//! - **[`engine`]: The Moving Parts.** Configuration, structured events, the incremental
//!   directory scanner, the DSSP subprocess extractor, the contest clock and leaderboards.
//!
//! - **[`workflows`]: The Public API.** The monitor and contest loops that tie the
//!   `engine` and `core` together. Workflows never print; they report
//!   [`engine::progress::MonitorEvent`]s to a caller-supplied callback.

pub mod core;
pub mod engine;
pub mod workflows;

//! # Core Module
//!
//! This module provides the stateless building blocks of helixwatch: the data model for
//! per-residue secondary-structure assignments, the helix analysis algorithms, and the
//! file I/O needed to read DSSP output and unpack compressed structure files.
//!
//! ## Architecture
//!
//! - **Secondary Structure Model** ([`structure`]) - DSSP structure codes and the per-file
//!   mapping from structure code to residue numbers
//! - **Helix Analysis** ([`helix`]) - Helical content and longest contiguous helix run
//! - **File I/O** ([`io`]) - Fixed-column DSSP output parsing and in-place decompression
//! - **Formatting** ([`ordinal`]) - English ordinals for leaderboard ranks
//!
//! Nothing in this module touches process-wide state or spawns processes; every function
//! is deterministic given its inputs (and, for [`io`], the filesystem).

pub mod helix;
pub mod io;
pub mod ordinal;
pub mod structure;

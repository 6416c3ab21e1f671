//! Provides input/output functionality for secondary-structure data.
//!
//! This module contains the parser for the column-oriented text produced by DSSP,
//! a unified trait-based interface for reading secondary-structure assignments, and
//! in-place decompression of compressed structure files.

pub mod archive;
pub mod dssp;
pub mod traits;

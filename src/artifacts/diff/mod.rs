//! Line diffing
//!
//! This module implements the shortest-edit-script pipeline:
//!
//! - `lines`: splitting raw text into line sequences
//! - `myers`: Myers' O(ND) forward search and backtracking
//! - `trace`: the per-depth search state the backtracker walks
//! - `edit`: edit operations and scripts
//! - `compact`: context-free `+ `/`- ` rendering of a script
//! - `aggregate`: per-file diffs assembled into one report
//!
//! Every call owns its trace and script; nothing is shared between calls.

pub mod aggregate;
pub mod compact;
pub mod edit;
pub mod error;
pub mod lines;
pub mod myers;
pub mod options;
pub mod trace;

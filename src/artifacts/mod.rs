//! Diff data structures and algorithms
//!
//! - `core`: Shared utilities (pager wrapper)
//! - `diff`: Line splitting, Myers' diff, compact formatting and aggregation

pub mod core;
pub mod diff;

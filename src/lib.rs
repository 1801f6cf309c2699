//! Shortest-edit-script line diffs rendered as compact patches
//!
//! The engine lives in [`artifacts::diff`]: text is split into lines, compared
//! with Myers' O(ND) algorithm, and rendered keeping only insertions (`+ `)
//! and deletions (`- `). [`artifacts::diff::aggregate`] runs that pipeline
//! over many files and joins the results under `=== <path> ===` headers.
//!
//! [`areas`] and [`commands`] wrap the engine into the `sesdiff` command line.

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::diff::aggregate::{ChangedFile, DiffAggregator, DiffReport, NewFile};
pub use artifacts::diff::edit::{Edit, EditScript};
pub use artifacts::diff::lines::{LineEndings, LineSet, split_lines};
pub use artifacts::diff::myers::{DiffAlgorithm, MyersDiff};
pub use artifacts::diff::options::DiffOptions;

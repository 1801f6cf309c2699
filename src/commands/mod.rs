//! Command implementations
//!
//! - `diff`: Compact diff of two files
//! - `report`: Aggregated compact report of two snapshot directories
//!
//! Commands are methods on [`Session`](crate::areas::session::Session) and
//! write their output through its writer.

pub mod diff;
pub mod report;

//! Runtime areas the commands operate on
//!
//! - `session`: Output writer and diff options for one invocation
//! - `workspace`: Read access to a snapshot directory

pub mod session;
pub mod workspace;

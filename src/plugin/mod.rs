//! Plugin module - the CPU count check itself
//!
//! - `dispatch`: live/offline decision producing one `Outcome`
//! - `host`: logical CPU query for live mode
//! - `metadata`: the header the framework lists plugins by

pub mod dispatch;
pub mod host;
pub mod metadata;

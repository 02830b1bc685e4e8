//! Metrics module.
//!
//! Fixed-width time bucketing of alert-creation timestamps:
//! - The bucketing sweep over a pre-sorted alert sequence
//! - The metrics query that validates the interval and fetches the alerts

pub mod bucket;
pub mod query;

pub use bucket::*;
pub use query::*;

//! Mutation module.
//!
//! Batch status transitions and alert creation. The store decides per-ID
//! eligibility; this layer validates targets, maps API status names, and
//! re-fetches the rows the store reports as updated.

pub mod create;
pub mod status;

pub use create::*;
pub use status::*;

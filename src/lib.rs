//! Alertdesk Core - Alert query and resolution engine
//!
//! This crate provides the core alert read/mutation logic for Alertdesk,
//! sitting between an API layer and the backing stores. The implementation
//! prioritizes:
//!
//! 1. **Stable pagination** - Keyset cursors that survive concurrent writes
//! 2. **Logging** - Every decision point logged with request context
//! 3. **Predictable errors** - Field-attributed validation, wrapped store faults
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `search` - Keyset-paginated alert and alert-log queries
//! - `metrics` - Time-bucketed alert-creation counts
//! - `resolve` - Notification-state derivation from log entries
//! - `mutate` - Batch status transitions and alert creation
//! - `model` - Alert, log-entry, and notification records
//! - `store` - Collaborator traits over the backing stores
//! - `validation` - Field-attributed input checks and text sanitization
//! - `logging` - Structured logging with request context

pub mod context;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod mutate;
pub mod resolve;
pub mod search;
pub mod store;
pub mod validation;

#[cfg(test)]
mod testing;

pub use context::RequestContext;
pub use error::{CoreError, CoreResult};

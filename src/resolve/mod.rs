//! Notification-state resolution module.
//!
//! Derives a normalized (status, details) pair from a log entry's event
//! payload, consulting the notification store for sent notifications.

pub mod state;

pub use state::*;

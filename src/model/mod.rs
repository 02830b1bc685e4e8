//! Domain models.
//!
//! Alerts, alert log entries, and notification delivery status. These
//! mirror the records held by the external stores; this core never owns
//! their persistence.

pub mod alert;
pub mod log;
pub mod notification;

pub use alert::*;
pub use log::*;
pub use notification::*;

//! Alert log entry model.
//!
//! Log entries are append-only records of what happened to an alert. Each
//! entry carries a kind-tagged event payload; the payload shape depends on
//! the kind, so the event is a sum type rather than an opaque blob.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind-tagged event payload of a log entry.
///
/// Only three kinds carry state the resolver can derive anything from;
/// `Other` absorbs kinds this core has no structured payload for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogEvent {
    Created {
        #[serde(default)]
        ep_no_steps: bool,
    },
    Escalated {
        #[serde(default)]
        no_one_on_call: bool,
    },
    NotificationSent {
        message_id: String,
    },
    NoNotificationSent,
    Acknowledged,
    Closed,
    Reopened,
    StatusChanged,
    #[serde(other)]
    Other,
}

impl LogEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            LogEvent::Created { .. } => "created",
            LogEvent::Escalated { .. } => "escalated",
            LogEvent::NotificationSent { .. } => "notification_sent",
            LogEvent::NoNotificationSent => "no_notification_sent",
            LogEvent::Acknowledged => "acknowledged",
            LogEvent::Closed => "closed",
            LogEvent::Reopened => "reopened",
            LogEvent::StatusChanged => "status_changed",
            LogEvent::Other => "other",
        }
    }
}

/// A single entry in an alert's log. Never mutated or deleted by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertLogEntry {
    pub id: i64,
    pub alert_id: i64,
    pub timestamp: DateTime<Utc>,
    /// Human-readable rendering supplied by the log store.
    pub message: String,
    pub event: LogEvent,
}

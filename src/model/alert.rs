//! Alert model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum accepted summary length, in characters.
pub const MAX_SUMMARY_LENGTH: usize = 1024;
/// Maximum accepted details length, in characters.
pub const MAX_DETAILS_LENGTH: usize = 32768;

/// Lifecycle status of an alert.
///
/// The declaration order is the display priority: triggered alerts sort
/// ahead of acknowledged ones, closed alerts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Triggered,
    Active,
    Closed,
}

/// API-facing status names.
///
/// The API speaks in terms of acknowledgement; internally an acknowledged
/// alert is `Active` and an unacknowledged one is `Triggered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatusTag {
    Acknowledged,
    Unacknowledged,
    Closed,
}

impl AlertStatusTag {
    /// Internal status this tag maps to.
    pub fn to_status(self) -> AlertStatus {
        match self {
            AlertStatusTag::Acknowledged => AlertStatus::Active,
            AlertStatusTag::Unacknowledged => AlertStatus::Triggered,
            AlertStatusTag::Closed => AlertStatus::Closed,
        }
    }

    /// Parse an API status filter value. Unrecognized values yield `None`
    /// so callers can ignore them rather than reject the request.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "acknowledged" => Some(AlertStatusTag::Acknowledged),
            "unacknowledged" => Some(AlertStatusTag::Unacknowledged),
            "closed" => Some(AlertStatusTag::Closed),
            _ => None,
        }
    }
}

impl From<AlertStatus> for AlertStatusTag {
    fn from(status: AlertStatus) -> Self {
        match status {
            AlertStatus::Triggered => AlertStatusTag::Unacknowledged,
            AlertStatus::Active => AlertStatusTag::Acknowledged,
            AlertStatus::Closed => AlertStatusTag::Closed,
        }
    }
}

/// An alert as held by the alert store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub service_id: String,
    pub summary: String,
    pub details: String,
    pub status: AlertStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an alert. New alerts always start out triggered;
/// the store assigns the ID and creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlert {
    pub service_id: String,
    pub summary: String,
    pub details: String,
}

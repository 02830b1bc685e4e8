//! Notification delivery status and its derived state.

use serde::{Deserialize, Serialize};

/// Delivery state of a sent notification, as reported by the notification
/// store. A snapshot only: delivery workers mutate it concurrently, so two
/// reads of the same message ID may disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryState {
    Pending,
    Sending,
    Sent,
    Delivered,
    FailedTemp,
    FailedPerm,
}

impl DeliveryState {
    /// Human-readable prefix for the details line of a derived state.
    pub fn prefix(self) -> &'static str {
        match self {
            DeliveryState::Pending => "Pending",
            DeliveryState::Sending => "Sending",
            DeliveryState::Sent => "Sent",
            DeliveryState::Delivered => "Delivered",
            DeliveryState::FailedTemp | DeliveryState::FailedPerm => "Failed",
        }
    }
}

/// Point-in-time delivery status of one notification message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationStatus {
    pub state: DeliveryState,
    /// Free-text detail from the notification store; may be empty.
    pub details: String,
    pub dest_type: String,
    pub src_value: String,
}

/// Normalized severity of a derived notification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StateStatus {
    Ok,
    Warn,
    Error,
}

/// Derived, never-stored projection of a log entry's notification outcome.
/// Recomputed on every read; `status` stays unset when the delivery state
/// implies neither success nor failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationState {
    pub status: Option<StateStatus>,
    pub details: String,
    pub formatted_src_value: Option<String>,
}

impl NotificationState {
    /// A warning state with no source value, used for policy anomalies.
    pub fn warn(details: &str) -> Self {
        Self {
            status: Some(StateStatus::Warn),
            details: details.to_string(),
            formatted_src_value: None,
        }
    }
}

//! Notification-state resolver.
//!
//! A projection over `(event payload, optional delivery-status lookup)`;
//! `None` is a legal result, since most log kinds carry no derivable
//! status. The delivery status read may be stale relative to the log entry
//! (delivery workers mutate it concurrently), but it always belongs to the
//! entry's own message ID.

use crate::context::RequestContext;
use crate::error::{CoreError, CoreResult};
use crate::model::{
    AlertLogEntry, DeliveryState, LogEvent, NotificationState, NotificationStatus, StateStatus,
};
use crate::store::{DestinationFormatter, NotificationLookup};

/// Resolves the derived state of alert log entries.
pub struct StateResolver<'a> {
    lookup: &'a dyn NotificationLookup,
    formatter: &'a dyn DestinationFormatter,
}

impl<'a> StateResolver<'a> {
    pub fn new(lookup: &'a dyn NotificationLookup, formatter: &'a dyn DestinationFormatter) -> Self {
        Self { lookup, formatter }
    }

    /// Derive the state of one log entry, if it has any.
    pub fn resolve(
        &self,
        ctx: &RequestContext,
        entry: &AlertLogEntry,
    ) -> CoreResult<Option<NotificationState>> {
        match &entry.event {
            LogEvent::Created { ep_no_steps: true } => {
                Ok(Some(NotificationState::warn("No escalation policy steps")))
            }
            LogEvent::Escalated {
                no_one_on_call: true,
            } => Ok(Some(NotificationState::warn("No one was on-call"))),
            LogEvent::NotificationSent { message_id } => {
                self.notification_sent_state(ctx, entry, message_id)
            }
            _ => Ok(None),
        }
    }

    fn notification_sent_state(
        &self,
        ctx: &RequestContext,
        entry: &AlertLogEntry,
        message_id: &str,
    ) -> CoreResult<Option<NotificationState>> {
        let log_ctx = ctx.alert_context(entry.alert_id);

        let status = self
            .lookup
            .find_status(message_id)
            .map_err(|e| CoreError::store("find alert log state", e))?;
        let status = match status {
            Some(s) => s,
            None => {
                log::debug!("{} NOTIFICATION_STATE_ABSENT entry={}", log_ctx, entry.id);
                return Ok(None);
            }
        };

        let formatted = self.formatter.format(&status.dest_type, &status.src_value);
        Ok(Some(state_from_status(&status, formatted)))
    }
}

/// Build a normalized state from a delivery-status snapshot.
///
/// OK for sent/delivered, ERROR for either failure mode, unset otherwise.
/// Details start from the fixed state prefix: an empty store detail keeps
/// the prefix alone, a detail that merely repeats the prefix (any case) is
/// collapsed, and anything else is appended after the prefix.
pub fn state_from_status(status: &NotificationStatus, formatted_src: String) -> NotificationState {
    let severity = match status.state {
        DeliveryState::Sent | DeliveryState::Delivered => Some(StateStatus::Ok),
        DeliveryState::FailedTemp | DeliveryState::FailedPerm => Some(StateStatus::Error),
        DeliveryState::Pending | DeliveryState::Sending => None,
    };

    let prefix = status.state.prefix();
    let details = if status.details.is_empty() || status.details.eq_ignore_ascii_case(prefix) {
        prefix.to_string()
    } else {
        format!("{}: {}", prefix, status.details)
    };

    NotificationState {
        status: severity,
        details,
        formatted_src_value: Some(formatted_src),
    }
}

//! Collaborator interfaces.
//!
//! The alert, alert-log, notification, and favorites stores are external;
//! their CRUD and transaction semantics are assumed correct. All calls are
//! synchronous request/response and their failures are opaque to this core:
//! every error is wrapped with call-site context and propagated immediately,
//! never retried.

use crate::model::{Alert, AlertLogEntry, AlertStatus, NewAlert, NotificationStatus};
use crate::search::{LogSearchOptions, SearchOptions};

/// Result of a collaborator call. Failures are never introspected.
pub type StoreResult<T> = anyhow::Result<T>;

/// Kind of target a favorite can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    Service,
    EscalationPolicy,
    Rotation,
    Schedule,
    User,
}

/// One favorite of a user, in the user's own ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteTarget {
    pub target_type: TargetType,
    pub target_id: String,
}

/// Alert persistence.
pub trait AlertStore {
    /// Bounded, sorted, filtered scan. Honors the keyset resumption point
    /// in `opts.after` for the requested sort mode.
    fn search(&self, opts: &SearchOptions) -> StoreResult<Vec<Alert>>;

    fn create(&self, alert: NewAlert) -> StoreResult<Alert>;

    fn find_many(&self, ids: &[i64]) -> StoreResult<Vec<Alert>>;

    /// Advance escalation for each ID. The store decides per-ID eligibility
    /// (already-closed alerts are silently skipped) and reports the IDs it
    /// actually updated, which may be a subset of the input.
    fn escalate_many(&self, ids: &[i64]) -> StoreResult<Vec<i64>>;

    /// Apply a status to each ID; reports the IDs actually updated.
    fn update_many_status(&self, status: AlertStatus, ids: &[i64]) -> StoreResult<Vec<i64>>;

    /// Apply a status to every alert of a service. All-or-nothing from this
    /// layer's perspective.
    fn update_status_by_service(&self, service_id: &str, status: AlertStatus) -> StoreResult<()>;
}

/// Alert-log persistence. Entries are returned newest first.
pub trait AlertLogStore {
    fn search(&self, opts: &LogSearchOptions) -> StoreResult<Vec<AlertLogEntry>>;
}

/// Delivery-status lookup by message ID. Absent is a normal outcome; the
/// returned snapshot may already be stale when it arrives.
pub trait NotificationLookup {
    fn find_status(&self, message_id: &str) -> StoreResult<Option<NotificationStatus>>;
}

/// A user's favorites, ordered as the user keeps them.
pub trait FavoriteStore {
    fn find_all(&self, user_id: &str, target_types: &[TargetType])
        -> StoreResult<Vec<FavoriteTarget>>;
}

/// Renders a destination value for display (e.g. phone number formatting).
/// Pure; no error path.
pub trait DestinationFormatter {
    fn format(&self, dest_type: &str, src_value: &str) -> String;
}

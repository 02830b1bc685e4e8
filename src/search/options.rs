//! Search options and pagination primitives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::AlertStatus;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: usize = 15;
/// Largest page a caller may request.
pub const MAX_LIMIT: usize = 100;
/// Most explicit service IDs a single request may filter by.
pub const MAX_SERVICE_FILTER: usize = 50;

/// Sort order for alert searches. The alert ID is always the tie-breaker,
/// so every mode yields a total order (required for stable pagination).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// By status priority (triggered, active, closed), then ID ascending.
    #[default]
    StatusId,
    /// By creation time ascending, then ID ascending.
    DateId,
    /// By creation time descending, then ID descending.
    DateIdReverse,
}

impl SortMode {
    /// Parse an API sort value. Unrecognized values yield `None` so callers
    /// keep the default rather than reject the request.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "statusID" => Some(SortMode::StatusId),
            "dateID" => Some(SortMode::DateId),
            "dateIDReverse" => Some(SortMode::DateIdReverse),
            _ => None,
        }
    }
}

/// Service-ID filter with valid-empty semantics.
///
/// This is a tri-state, not a plain set:
/// - disabled (`valid == false`): no filter, match everything
/// - valid with members: match only those services
/// - valid and empty: match nothing (a favorites-only query with no
///   favorites must return zero alerts, not all of them)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFilter {
    #[serde(default)]
    pub ids: Vec<String>,
    #[serde(default)]
    pub valid: bool,
}

impl ServiceFilter {
    /// No filtering; matches every service.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Filter to exactly the given IDs. Empty means match nothing.
    pub fn only(ids: Vec<String>) -> Self {
        Self { ids, valid: true }
    }

    pub fn is_active(&self) -> bool {
        self.valid
    }

    pub fn matches(&self, service_id: &str) -> bool {
        !self.valid || self.ids.iter().any(|id| id == service_id)
    }
}

/// Keyset resumption point for an alert scan: the sort-relevant fields of
/// the last row returned. Which fields the comparison uses depends on the
/// sort mode; all of them are carried so the cursor stays mode-agnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertCursor {
    pub id: i64,
    pub status: AlertStatus,
    pub created_at: DateTime<Utc>,
}

/// Keyset resumption point for a log scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogCursor {
    pub id: i64,
}

/// Full predicate set for one alert search. One-shot: rebuilt per request
/// (or restored from a cursor), never persisted.
///
/// `limit` and `omit` are request-scoped and excluded from the cursor;
/// everything else is echoed so a token fully determines the next page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<AlertStatus>,
    #[serde(default)]
    pub service_filter: ServiceFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_before: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notified_user_id: Option<String>,
    #[serde(default)]
    pub sort: SortMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<AlertCursor>,

    #[serde(skip)]
    pub limit: usize,
    #[serde(skip)]
    pub omit: Vec<i64>,
}

/// Predicate set for one alert-log search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogSearchOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_alert_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<LogCursor>,

    #[serde(skip)]
    pub limit: usize,
}

/// One page of results. Carries at most the requested limit of nodes; the
/// end cursor, when present, always corresponds to the last node actually
/// returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page<T> {
    pub nodes: Vec<T>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

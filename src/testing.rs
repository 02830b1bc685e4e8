//! In-memory collaborator fakes for tests.
//!
//! The alert store fake implements the full keyset contract (filtering,
//! sort modes, resumption point, limit) so pagination tests exercise a
//! real end-to-end walk rather than canned pages. All fakes support
//! one-shot failure injection via `fail_next`.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use anyhow::bail;
use chrono::{DateTime, Utc};

use crate::model::{
    Alert, AlertLogEntry, AlertStatus, LogEvent, NewAlert, NotificationStatus,
};
use crate::search::{LogSearchOptions, SearchOptions, SortMode};
use crate::store::{
    AlertLogStore, AlertStore, DestinationFormatter, FavoriteStore, FavoriteTarget,
    NotificationLookup, StoreResult, TargetType,
};

pub(crate) fn fixture_alert(
    id: i64,
    service_id: &str,
    status: AlertStatus,
    created_at: DateTime<Utc>,
) -> Alert {
    Alert {
        id,
        service_id: service_id.to_string(),
        summary: format!("alert {}", id),
        details: String::new(),
        status,
        created_at,
    }
}

pub(crate) fn fixture_log_entry(
    id: i64,
    alert_id: i64,
    timestamp: DateTime<Utc>,
    event: LogEvent,
) -> AlertLogEntry {
    AlertLogEntry {
        id,
        alert_id,
        timestamp,
        message: format!("entry {}", id),
        event,
    }
}

#[derive(Default)]
pub(crate) struct MemAlertStore {
    alerts: RefCell<Vec<Alert>>,
    notified: RefCell<HashMap<String, HashSet<i64>>>,
    fail: Cell<bool>,
}

impl MemAlertStore {
    pub(crate) fn insert(&self, alert: Alert) {
        self.alerts.borrow_mut().push(alert);
    }

    pub(crate) fn get(&self, id: i64) -> Option<Alert> {
        self.alerts.borrow().iter().find(|a| a.id == id).cloned()
    }

    pub(crate) fn set_notified(&self, user_id: &str, alert_ids: &[i64]) {
        self.notified
            .borrow_mut()
            .insert(user_id.to_string(), alert_ids.iter().copied().collect());
    }

    /// Make the next store call fail.
    pub(crate) fn fail_next(&self) {
        self.fail.set(true);
    }

    fn check_fail(&self) -> StoreResult<()> {
        if self.fail.take() {
            bail!("store offline");
        }
        Ok(())
    }
}

impl AlertStore for MemAlertStore {
    fn search(&self, opts: &SearchOptions) -> StoreResult<Vec<Alert>> {
        self.check_fail()?;

        let notified: HashSet<i64> = opts
            .notified_user_id
            .as_deref()
            .and_then(|u| self.notified.borrow().get(u).cloned())
            .unwrap_or_default();

        let mut rows: Vec<Alert> = self
            .alerts
            .borrow()
            .iter()
            .filter(|a| {
                let in_scope =
                    opts.service_filter.matches(&a.service_id) || notified.contains(&a.id);
                if !in_scope {
                    return false;
                }
                if !opts.status.is_empty() && !opts.status.contains(&a.status) {
                    return false;
                }
                if opts.omit.contains(&a.id) {
                    return false;
                }
                if !opts.search.is_empty() {
                    let needle = opts.search.to_lowercase();
                    if !a.summary.to_lowercase().contains(&needle)
                        && !a.details.to_lowercase().contains(&needle)
                    {
                        return false;
                    }
                }
                if let Some(before) = opts.before {
                    if a.created_at >= before {
                        return false;
                    }
                }
                if let Some(not_before) = opts.not_before {
                    if a.created_at < not_before {
                        return false;
                    }
                }
                if let Some(after) = &opts.after {
                    let keep = match opts.sort {
                        SortMode::StatusId => (a.status, a.id) > (after.status, after.id),
                        SortMode::DateId => {
                            (a.created_at, a.id) > (after.created_at, after.id)
                        }
                        SortMode::DateIdReverse => {
                            (a.created_at, a.id) < (after.created_at, after.id)
                        }
                    };
                    if !keep {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        match opts.sort {
            SortMode::StatusId => rows.sort_by_key(|a| (a.status, a.id)),
            SortMode::DateId => rows.sort_by_key(|a| (a.created_at, a.id)),
            SortMode::DateIdReverse => {
                rows.sort_by(|x, y| (y.created_at, y.id).cmp(&(x.created_at, x.id)))
            }
        }

        if opts.limit > 0 {
            rows.truncate(opts.limit);
        }
        Ok(rows)
    }

    fn create(&self, alert: NewAlert) -> StoreResult<Alert> {
        self.check_fail()?;
        let id = self
            .alerts
            .borrow()
            .iter()
            .map(|a| a.id)
            .max()
            .unwrap_or(0)
            + 1;
        let row = Alert {
            id,
            service_id: alert.service_id,
            summary: alert.summary,
            details: alert.details,
            status: AlertStatus::Triggered,
            created_at: Utc::now(),
        };
        self.alerts.borrow_mut().push(row.clone());
        Ok(row)
    }

    fn find_many(&self, ids: &[i64]) -> StoreResult<Vec<Alert>> {
        self.check_fail()?;
        Ok(self
            .alerts
            .borrow()
            .iter()
            .filter(|a| ids.contains(&a.id))
            .cloned()
            .collect())
    }

    fn escalate_many(&self, ids: &[i64]) -> StoreResult<Vec<i64>> {
        self.check_fail()?;
        let mut updated = Vec::new();
        let mut alerts = self.alerts.borrow_mut();
        for id in ids {
            if let Some(a) = alerts.iter_mut().find(|a| a.id == *id) {
                // Closed alerts are not eligible for escalation.
                if a.status != AlertStatus::Closed {
                    a.status = AlertStatus::Triggered;
                    updated.push(*id);
                }
            }
        }
        Ok(updated)
    }

    fn update_many_status(&self, status: AlertStatus, ids: &[i64]) -> StoreResult<Vec<i64>> {
        self.check_fail()?;
        let mut updated = Vec::new();
        let mut alerts = self.alerts.borrow_mut();
        for id in ids {
            if let Some(a) = alerts.iter_mut().find(|a| a.id == *id) {
                if a.status != status {
                    a.status = status;
                    updated.push(*id);
                }
            }
        }
        Ok(updated)
    }

    fn update_status_by_service(&self, service_id: &str, status: AlertStatus) -> StoreResult<()> {
        self.check_fail()?;
        for a in self.alerts.borrow_mut().iter_mut() {
            if a.service_id == service_id {
                a.status = status;
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MemLogStore {
    entries: RefCell<Vec<AlertLogEntry>>,
    fail: Cell<bool>,
}

impl MemLogStore {
    pub(crate) fn insert(&self, entry: AlertLogEntry) {
        self.entries.borrow_mut().push(entry);
    }

    #[allow(dead_code)]
    pub(crate) fn fail_next(&self) {
        self.fail.set(true);
    }
}

impl AlertLogStore for MemLogStore {
    fn search(&self, opts: &LogSearchOptions) -> StoreResult<Vec<AlertLogEntry>> {
        if self.fail.take() {
            bail!("store offline");
        }

        let mut rows: Vec<AlertLogEntry> = self
            .entries
            .borrow()
            .iter()
            .filter(|e| {
                if !opts.filter_alert_ids.is_empty()
                    && !opts.filter_alert_ids.contains(&e.alert_id)
                {
                    return false;
                }
                if let Some(after) = &opts.after {
                    if e.id >= after.id {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        // Newest first.
        rows.sort_by(|x, y| y.id.cmp(&x.id));
        if opts.limit > 0 {
            rows.truncate(opts.limit);
        }
        Ok(rows)
    }
}

#[derive(Default)]
pub(crate) struct MemNotificationLookup {
    statuses: RefCell<HashMap<String, NotificationStatus>>,
    fail: Cell<bool>,
}

impl MemNotificationLookup {
    pub(crate) fn set(&self, message_id: &str, status: NotificationStatus) {
        self.statuses
            .borrow_mut()
            .insert(message_id.to_string(), status);
    }

    pub(crate) fn fail_next(&self) {
        self.fail.set(true);
    }
}

impl NotificationLookup for MemNotificationLookup {
    fn find_status(&self, message_id: &str) -> StoreResult<Option<NotificationStatus>> {
        if self.fail.take() {
            bail!("notification store offline");
        }
        Ok(self.statuses.borrow().get(message_id).cloned())
    }
}

#[derive(Default)]
pub(crate) struct MemFavoriteStore {
    favorites: RefCell<HashMap<String, Vec<String>>>,
}

impl MemFavoriteStore {
    pub(crate) fn set(&self, user_id: &str, service_ids: &[&str]) {
        self.favorites.borrow_mut().insert(
            user_id.to_string(),
            service_ids.iter().map(|s| s.to_string()).collect(),
        );
    }
}

impl FavoriteStore for MemFavoriteStore {
    fn find_all(
        &self,
        user_id: &str,
        target_types: &[TargetType],
    ) -> StoreResult<Vec<FavoriteTarget>> {
        if !target_types.contains(&TargetType::Service) {
            return Ok(Vec::new());
        }
        Ok(self
            .favorites
            .borrow()
            .get(user_id)
            .map(|ids| {
                ids.iter()
                    .map(|id| FavoriteTarget {
                        target_type: TargetType::Service,
                        target_id: id.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Formats destinations as `dest_type:src_value`.
pub(crate) struct PlainFormatter;

impl DestinationFormatter for PlainFormatter {
    fn format(&self, dest_type: &str, src_value: &str) -> String {
        format!("{}:{}", dest_type, src_value)
    }
}

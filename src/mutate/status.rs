//! Bulk status mutations.

use crate::context::RequestContext;
use crate::error::{CoreError, CoreResult};
use crate::model::{Alert, AlertStatusTag};
use crate::store::AlertStore;
use crate::validation::check_one_of;

/// Batch status transitions over the alert store.
pub struct AlertMutator<'a> {
    alert_store: &'a dyn AlertStore,
}

impl<'a> AlertMutator<'a> {
    pub fn new(alert_store: &'a dyn AlertStore) -> Self {
        Self { alert_store }
    }

    /// Advance escalation for a batch of alerts and return the resulting
    /// rows for exactly the IDs the store reports as updated. Ineligible
    /// IDs (e.g. already closed) are skipped by the store, not here.
    pub fn escalate_many(&self, ctx: &RequestContext, ids: &[i64]) -> CoreResult<Vec<Alert>> {
        let log_ctx = ctx.log_context();

        let updated = self
            .alert_store
            .escalate_many(ids)
            .map_err(|e| CoreError::store("escalate alerts", e))?;

        log::info!(
            "{} ALERTS_ESCALATED requested={} updated={}",
            log_ctx,
            ids.len(),
            updated.len()
        );

        self.alert_store
            .find_many(&updated)
            .map_err(|e| CoreError::store("fetch escalated alerts", e))
    }

    /// Apply a status to a batch of alerts. The target is restricted to
    /// acknowledging or closing; "set to unacknowledged" is not a valid
    /// transition. Returns the re-fetched rows actually updated.
    pub fn update_many(
        &self,
        ctx: &RequestContext,
        ids: &[i64],
        new_status: AlertStatusTag,
    ) -> CoreResult<Vec<Alert>> {
        let log_ctx = ctx.log_context();

        check_one_of(
            "Status",
            new_status,
            &[AlertStatusTag::Acknowledged, AlertStatusTag::Closed],
        )?;

        let status = new_status.to_status();
        let updated = self
            .alert_store
            .update_many_status(status, ids)
            .map_err(|e| CoreError::store("update alert status", e))?;

        log::info!(
            "{} ALERTS_UPDATED status={:?} requested={} updated={}",
            log_ctx,
            status,
            ids.len(),
            updated.len()
        );

        self.alert_store
            .find_many(&updated)
            .map_err(|e| CoreError::store("fetch updated alerts", e))
    }

    /// Apply a status to every alert of a service in one store call.
    /// All-or-nothing: success reports `true`, with no per-row detail.
    pub fn update_by_service(
        &self,
        ctx: &RequestContext,
        service_id: &str,
        new_status: AlertStatusTag,
    ) -> CoreResult<bool> {
        let log_ctx = ctx.log_context();

        check_one_of(
            "Status",
            new_status,
            &[AlertStatusTag::Acknowledged, AlertStatusTag::Closed],
        )?;

        let status = new_status.to_status();
        self.alert_store
            .update_status_by_service(service_id, status)
            .map_err(|e| CoreError::store("update alerts by service", e))?;

        log::info!(
            "{} SERVICE_ALERTS_UPDATED service={} status={:?}",
            log_ctx,
            service_id,
            status
        );

        Ok(true)
    }
}

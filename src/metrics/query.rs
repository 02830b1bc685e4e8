//! Alert metrics query.
//!
//! Validates the repeating interval, fetches the matching closed alerts in
//! ascending creation order, and buckets them.

use chrono::Duration;

use crate::context::RequestContext;
use crate::error::{CoreError, CoreResult};
use crate::metrics::bucket::{split_range, AlertDataPoint, RepeatingInterval};
use crate::model::AlertStatus;
use crate::search::options::{SearchOptions, ServiceFilter, SortMode, MAX_LIMIT};
use crate::store::AlertStore;
use crate::validation::check_range;

/// Upper bound on the bucket count of one metrics request.
pub const MAX_REPEAT: u32 = 30;

/// One metrics request as it arrives from the API layer.
#[derive(Debug, Clone)]
pub struct AlertMetricsRequest {
    /// Exactly one service ID is required.
    pub filter_by_service_id: Vec<String>,
    pub interval: RepeatingInterval,
}

/// Aggregate alert-creation metrics over the alert store.
pub struct MetricsQuery<'a> {
    alert_store: &'a dyn AlertStore,
}

impl<'a> MetricsQuery<'a> {
    pub fn new(alert_store: &'a dyn AlertStore) -> Self {
        Self { alert_store }
    }

    /// Produce one data point per bucket of the requested interval.
    ///
    /// Interval validation happens here, before the bucketing sweep, so a
    /// caller-supplied zero period can never reach the sweep's panic.
    pub fn alert_metrics(
        &self,
        ctx: &RequestContext,
        req: &AlertMetricsRequest,
    ) -> CoreResult<Vec<AlertDataPoint>> {
        let log_ctx = ctx.log_context();

        check_range("ServiceIDs", req.filter_by_service_id.len(), 1, 1)?;

        // Only daily buckets are supported for now; this also rules out a
        // zero-length period.
        if req.interval.period != Duration::days(1) {
            return Err(CoreError::validation(
                "rInterval",
                "only daily currently supported",
            ));
        }
        if req.interval.repeat > MAX_REPEAT {
            return Err(CoreError::validation(
                "rInterval",
                format!("repeat count must be <= {}", MAX_REPEAT),
            ));
        }

        let opts = SearchOptions {
            status: vec![AlertStatus::Closed],
            service_filter: ServiceFilter::only(req.filter_by_service_id.clone()),
            not_before: Some(req.interval.start),
            before: Some(req.interval.end()),
            // Ascending creation order is the sweep's precondition.
            sort: SortMode::DateId,
            limit: MAX_LIMIT,
            ..Default::default()
        };
        let alerts = self
            .alert_store
            .search(&opts)
            .map_err(|e| CoreError::store("search alerts for metrics", e))?;

        log::info!(
            "{} ALERT_METRICS buckets={} alerts={}",
            log_ctx,
            req.interval.repeat,
            alerts.len()
        );

        Ok(split_range(&req.interval, &alerts))
    }
}

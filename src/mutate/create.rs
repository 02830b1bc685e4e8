//! Alert creation.

use crate::context::RequestContext;
use crate::error::{CoreError, CoreResult};
use crate::model::{Alert, NewAlert, MAX_DETAILS_LENGTH, MAX_SUMMARY_LENGTH};
use crate::store::AlertStore;
use crate::validation::sanitize_text;

/// Input for creating one alert.
#[derive(Debug, Clone, Default)]
pub struct NewAlertInput {
    pub service_id: String,
    pub summary: String,
    pub details: Option<String>,
    /// Clean and truncate summary/details instead of trusting the caller.
    pub sanitize: bool,
}

/// Create an alert. New alerts always start out triggered; the store
/// assigns the ID and creation timestamp.
pub fn create_alert(
    store: &dyn AlertStore,
    ctx: &RequestContext,
    input: NewAlertInput,
) -> CoreResult<Alert> {
    let log_ctx = ctx.log_context();

    let mut summary = input.summary;
    let mut details = input.details.unwrap_or_default();
    if input.sanitize {
        summary = sanitize_text(&summary, MAX_SUMMARY_LENGTH);
        details = sanitize_text(&details, MAX_DETAILS_LENGTH);
    }

    log::info!("{} ALERT_CREATE service={}", log_ctx, input.service_id);

    store
        .create(NewAlert {
            service_id: input.service_id,
            summary,
            details,
        })
        .map_err(|e| CoreError::store("create alert", e))
}

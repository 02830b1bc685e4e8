//! Log search engine.
//!
//! Same limit-plus-one pagination pattern as the alert search, scoped to
//! the log entries of a single alert. Entries come back newest first; the
//! cursor resumes strictly below the last returned entry ID.

use crate::context::RequestContext;
use crate::error::{CoreError, CoreResult};
use crate::model::AlertLogEntry;
use crate::search::cursor::{decode_cursor, encode_cursor};
use crate::search::options::{LogCursor, LogSearchOptions, Page, DEFAULT_LIMIT};
use crate::store::AlertLogStore;

/// One log search request as it arrives from the API layer.
#[derive(Debug, Clone, Default)]
pub struct LogSearchRequest {
    pub limit: Option<usize>,
    pub after: Option<String>,
}

/// Paginated log search over the alert-log store.
pub struct LogSearcher<'a> {
    log_store: &'a dyn AlertLogStore,
}

impl<'a> LogSearcher<'a> {
    pub fn new(log_store: &'a dyn AlertLogStore) -> Self {
        Self { log_store }
    }

    /// Run one page of the log search for `alert_id`.
    pub fn search(
        &self,
        ctx: &RequestContext,
        alert_id: i64,
        req: &LogSearchRequest,
    ) -> CoreResult<Page<AlertLogEntry>> {
        let log_ctx = ctx.alert_context(alert_id);

        let mut opts = LogSearchOptions::default();
        opts.filter_alert_ids.push(alert_id);

        if let Some(token) = req.after.as_deref().filter(|t| !t.is_empty()) {
            opts = decode_cursor(token)?;
        }

        opts.limit = req.limit.unwrap_or(0);
        if opts.limit == 0 {
            opts.limit = DEFAULT_LIMIT;
        }

        opts.limit += 1;
        let mut entries = self
            .log_store
            .search(&opts)
            .map_err(|e| CoreError::store("search alert logs", e))?;
        opts.limit -= 1;

        let has_next_page = entries.len() > opts.limit;
        if has_next_page {
            entries.truncate(opts.limit);
        }

        let end_cursor = match entries.last() {
            Some(last) => {
                opts.after = Some(LogCursor { id: last.id });
                Some(encode_cursor(&opts)?)
            }
            None => None,
        };

        log::info!(
            "{} LOG_SEARCH_COMPLETE returned={} has_next={}",
            log_ctx,
            entries.len(),
            has_next_page
        );

        Ok(Page {
            nodes: entries,
            has_next_page,
            end_cursor,
        })
    }
}

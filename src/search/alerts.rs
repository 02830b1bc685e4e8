//! Alert search engine.
//!
//! Builds a bounded, sorted, filtered query against the alert store and
//! assembles a page with next-page signaling. Filters come from one of two
//! places: a continuation cursor (which fully determines them) or the
//! request itself, where favorites and explicit service IDs are merged
//! into one effective filter.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::context::RequestContext;
use crate::error::{CoreError, CoreResult};
use crate::model::{Alert, AlertStatusTag};
use crate::search::cursor::{decode_cursor, encode_cursor};
use crate::search::options::{
    AlertCursor, Page, SearchOptions, ServiceFilter, SortMode, DEFAULT_LIMIT, MAX_LIMIT,
    MAX_SERVICE_FILTER,
};
use crate::store::{AlertStore, FavoriteStore, TargetType};
use crate::validation::check_range;

/// One alert search request as it arrives from the API layer.
///
/// Status filters and the sort mode arrive as strings; unrecognized values
/// are silently ignored rather than rejected, which keeps the observable
/// API behavior permissive.
#[derive(Debug, Clone, Default)]
pub struct AlertSearchRequest {
    pub filter_by_status: Vec<String>,
    pub filter_by_service_id: Vec<String>,
    pub search: Option<String>,
    /// Restrict results to the caller's favorite services.
    pub favorites_only: bool,
    /// Also include alerts the caller was notified for.
    pub include_notified: bool,
    pub omit: Vec<i64>,
    pub sort: Option<String>,
    pub created_before: Option<DateTime<Utc>>,
    pub not_created_before: Option<DateTime<Utc>>,
    pub first: Option<usize>,
    pub after: Option<String>,
}

/// Paginated alert search over the alert and favorites stores.
pub struct AlertSearcher<'a> {
    alert_store: &'a dyn AlertStore,
    favorite_store: &'a dyn FavoriteStore,
}

impl<'a> AlertSearcher<'a> {
    pub fn new(alert_store: &'a dyn AlertStore, favorite_store: &'a dyn FavoriteStore) -> Self {
        Self {
            alert_store,
            favorite_store,
        }
    }

    /// Run one page of the search.
    ///
    /// Fetches `limit + 1` rows; the extra row only signals that a next
    /// page exists and is never returned. The end cursor snapshots the
    /// effective options plus the sort key of the last returned row.
    pub fn search(
        &self,
        ctx: &RequestContext,
        req: &AlertSearchRequest,
    ) -> CoreResult<Page<Alert>> {
        let log_ctx = ctx.log_context();

        let mut opts = SearchOptions {
            limit: req.first.unwrap_or(0),
            ..Default::default()
        };
        if opts.limit == 0 {
            opts.limit = DEFAULT_LIMIT;
        }

        check_range("ServiceIDs", req.filter_by_service_id.len(), 0, MAX_SERVICE_FILTER)?;
        check_range("First", opts.limit, 1, MAX_LIMIT)?;

        if let Some(search) = &req.search {
            opts.search = search.clone();
        }
        opts.omit = req.omit.clone();
        if req.include_notified && !ctx.user_id().is_empty() {
            opts.notified_user_id = Some(ctx.user_id().to_string());
        }

        match req.after.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => {
                // The cursor fully determines filters and resumption point;
                // only the request-scoped limit and omit list survive.
                let mut parsed: SearchOptions = decode_cursor(token)?;
                parsed.limit = opts.limit;
                parsed.omit = std::mem::take(&mut opts.omit);
                log::debug!(
                    "{} ALERT_SEARCH_RESUME sort={:?} after_id={:?}",
                    log_ctx,
                    parsed.sort,
                    parsed.after.as_ref().map(|a| a.id)
                );
                opts = parsed;
            }
            None => {
                if req.favorites_only {
                    let ids = self.merge_favorites(ctx, &req.filter_by_service_id)?;
                    // Valid even when empty, so a user with no favorites
                    // gets an empty page instead of an unfiltered one.
                    opts.service_filter = ServiceFilter::only(ids);
                } else if !req.filter_by_service_id.is_empty() {
                    opts.service_filter =
                        ServiceFilter::only(req.filter_by_service_id.clone());
                }

                for value in &req.filter_by_status {
                    if let Some(tag) = AlertStatusTag::parse(value) {
                        opts.status.push(tag.to_status());
                    }
                }
                if let Some(sort) = req.sort.as_deref().and_then(SortMode::parse) {
                    opts.sort = sort;
                }
                opts.before = req.created_before;
                opts.not_before = req.not_created_before;
            }
        }

        opts.limit += 1;
        let mut alerts = self
            .alert_store
            .search(&opts)
            .map_err(|e| CoreError::store("search alerts", e))?;
        opts.limit -= 1;

        let has_next_page = alerts.len() > opts.limit;
        if has_next_page {
            alerts.truncate(opts.limit);
        }

        let end_cursor = match alerts.last() {
            Some(last) => {
                opts.after = Some(AlertCursor {
                    id: last.id,
                    status: last.status,
                    created_at: last.created_at,
                });
                Some(encode_cursor(&opts)?)
            }
            None => None,
        };

        log::info!(
            "{} ALERT_SEARCH_COMPLETE returned={} has_next={} sort={:?}",
            log_ctx,
            alerts.len(),
            has_next_page,
            opts.sort
        );

        Ok(Page {
            nodes: alerts,
            has_next_page,
            end_cursor,
        })
    }

    /// Merge the caller's favorite services with explicit service IDs into
    /// one effective ID set.
    ///
    /// Empty explicit IDs mean "all favorites"; otherwise the result is the
    /// intersection, preserving the order of the favorites sequence.
    fn merge_favorites(
        &self,
        ctx: &RequestContext,
        explicit: &[String],
    ) -> CoreResult<Vec<String>> {
        let targets = self
            .favorite_store
            .find_all(ctx.user_id(), &[TargetType::Service])
            .map_err(|e| CoreError::store("find favorite services", e))?;

        let favorites = targets.into_iter().map(|t| t.target_id);
        if explicit.is_empty() {
            return Ok(favorites.collect());
        }

        let wanted: HashSet<&str> = explicit.iter().map(String::as_str).collect();
        Ok(favorites.filter(|id| wanted.contains(id.as_str())).collect())
    }
}

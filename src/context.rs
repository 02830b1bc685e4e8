//! Per-request context.
//!
//! Carries the acting user's identity explicitly rather than reading it
//! from ambient process state, plus a generated request ID for log
//! correlation.

use uuid::Uuid;

use crate::logging::structured::LogContext;

/// Context for a single API request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub user_id: Option<String>,
}

impl RequestContext {
    pub fn new(user_id: Option<&str>) -> Self {
        let request_id = format!("req-{}", &Uuid::new_v4().to_string()[..8]);
        Self {
            request_id,
            user_id: user_id.map(|s| s.to_string()),
        }
    }

    /// Acting user ID, or empty when the request is unauthenticated.
    pub fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or("")
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.request_id)
    }

    /// Log context scoped to one alert.
    pub fn alert_context(&self, alert_id: i64) -> LogContext {
        LogContext::new(&self.request_id).with_alert(alert_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_prefix() {
        let ctx = RequestContext::new(Some("user-1"));
        assert!(ctx.request_id.starts_with("req-"));
        assert_eq!(ctx.user_id(), "user-1");
    }

    #[test]
    fn test_anonymous_user_id_is_empty() {
        let ctx = RequestContext::new(None);
        assert_eq!(ctx.user_id(), "");
    }
}

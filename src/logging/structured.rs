//! Structured logging utilities.
//!
//! Provides context-aware logging with request_id and alert_id included
//! in every log message.

use std::fmt;

/// Logging context for a request.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub request_id: String,
    pub alert_id: Option<i64>,
}

impl LogContext {
    pub fn new(request_id: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
            alert_id: None,
        }
    }

    pub fn with_alert(&self, alert_id: i64) -> Self {
        Self {
            request_id: self.request_id.clone(),
            alert_id: Some(alert_id),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alert_id {
            Some(id) => write!(f, "[req={}] [alert={}]", self.request_id, id),
            None => write!(f, "[req={}]", self.request_id),
        }
    }
}

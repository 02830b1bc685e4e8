//! Error taxonomy for the query core.
//!
//! Three caller-visible classes:
//! - `Validation` - bad input, always field-attributed, recoverable by
//!   correcting the request
//! - `Cursor` - malformed pagination token, caller must restart from the
//!   first page
//! - `Store` - a collaborator call failed; wrapped with call-site context
//!   and propagated verbatim, never retried or introspected
//!
//! Invariant violations (e.g. a zero-length bucket period) are programming
//! defects, not recoverable conditions, and panic instead of surfacing here.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors produced by the query/resolution core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A request field failed validation.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A pagination token could not be decoded.
    #[error("invalid cursor: {0}")]
    Cursor(String),

    /// A collaborator (store) call failed. The display string carries only
    /// the short call-site context; the underlying failure stays in the
    /// source chain.
    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl CoreError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn store(context: &'static str, source: anyhow::Error) -> Self {
        CoreError::Store { context, source }
    }

    /// Name of the offending field, for validation errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CoreError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_names_field() {
        let err = CoreError::validation("First", "must be between 1 and 100");
        assert_eq!(format!("{}", err), "invalid First: must be between 1 and 100");
        assert_eq!(err.field(), Some("First"));
    }

    #[test]
    fn test_store_display_hides_internal_detail() {
        let err = CoreError::store("search alerts", anyhow::anyhow!("connection refused to 10.0.0.3:5432"));
        // Display carries only the short context; detail stays in the chain.
        assert_eq!(format!("{}", err), "search alerts");
        assert!(std::error::Error::source(&err).is_some());
    }
}

//! Field-attributed validation checks.

use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Check that a count or limit falls within `[min, max]`.
pub fn check_range(field: &'static str, value: usize, min: usize, max: usize) -> CoreResult<()> {
    if value < min || value > max {
        return Err(CoreError::validation(
            field,
            format!("must be between {} and {}, got {}", min, max, value),
        ));
    }
    Ok(())
}

/// Check that a value is one of an allowed set.
pub fn check_one_of<T: PartialEq + fmt::Debug>(
    field: &'static str,
    value: T,
    allowed: &[T],
) -> CoreResult<()> {
    if allowed.iter().any(|a| *a == value) {
        return Ok(());
    }
    Err(CoreError::validation(
        field,
        format!("must be one of {:?}, got {:?}", allowed, value),
    ))
}

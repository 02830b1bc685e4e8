//! Request validation module.
//!
//! Field-attributed validation helpers for API input:
//! - Range and membership checks that name the offending field
//! - Text sanitization for caller-supplied summary/details

pub mod fields;
pub mod text;

pub use fields::*;
pub use text::*;

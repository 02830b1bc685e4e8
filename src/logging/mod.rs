//! Structured logging with request context.
//!
//! Provides logging utilities that include request_id and alert_id in
//! every log message for easy correlation.

pub mod structured;

pub use structured::*;

/// Initialize the module-level logger. Safe to call more than once.
pub fn init() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}

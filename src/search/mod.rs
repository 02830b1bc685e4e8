//! Search module.
//!
//! Keyset-paginated alert and alert-log queries:
//! - Search options with the service-filter tri-state and sort modes
//! - Opaque, versioned cursor codec
//! - Alert search engine (favorites merge, page assembly)
//! - Log search engine scoped to one alert

pub mod alerts;
pub mod cursor;
pub mod logs;
pub mod options;

pub use alerts::*;
pub use cursor::*;
pub use logs::*;
pub use options::*;

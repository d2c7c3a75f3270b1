//! Row cleaning and filtering for untyped tabular records.
//!
//! Input rows are [`record::Record`]s: field names mapped to raw string
//! values, as read from a delimited text file. The operations in
//! [`transformations`] trim, coerce and filter them into typed
//! [`models`] or plain lists of names and ids.

pub mod config;
pub mod error;
pub mod json;
pub mod models;
pub mod record;
pub mod transformations;

pub use config::{SalesColumns, SanitizerConfig, ScoreColumns};
pub use error::{NumericKind, SanitizeError, SanitizeResult};
pub use models::{CleanedSalesRecord, CleanedScoreRecord};
pub use record::Record;

//! Row cleaning and threshold filtering.
//!
//! Every operation is a single pass over a slice of [`Record`](crate::record::Record)s.
//! A row whose numeric field trims to the empty string is skipped; a row whose
//! numeric field is present but malformed aborts the whole call.
//!
//! # Modules
//!
//! - [`cleaning`]: Trim text fields and coerce numeric fields into typed records
//! - [`filtering`]: Extract names or ids of rows meeting a threshold
//!
//! # Example
//!
//! ```
//! use row_sanitizer::record::record;
//! use row_sanitizer::transformations::{clean_sales_data, filter_transactions};
//!
//! let rows = vec![record(&[
//!     ("id", "t1"),
//!     ("customer", " Alice "),
//!     ("amount", "120"),
//!     ("date", "2025-01-01"),
//!     ("status", "complete"),
//! ])];
//!
//! let cleaned = clean_sales_data(&rows).unwrap();
//! assert_eq!(cleaned[0].customer, "Alice");
//!
//! let ids = filter_transactions(&rows, 100).unwrap();
//! assert_eq!(ids, vec!["t1"]);
//! ```

pub mod cleaning;
pub mod filtering;

pub use cleaning::{
    clean_rows, clean_rows_efficient, clean_rows_efficient_with, clean_rows_with,
    clean_sales_data, clean_sales_data_with,
};
pub use filtering::{
    filter_high_scores, filter_high_scores_with, filter_transactions, filter_transactions_with,
};

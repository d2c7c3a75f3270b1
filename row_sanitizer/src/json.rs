//! JSON string boundary for the row operations.
//!
//! Each `*_json` function takes a JSON array of flat string-valued objects,
//! runs the matching operation with the default column names and returns the
//! result serialized as a JSON string.

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::record::Record;
use crate::transformations::{cleaning, filtering};

/// Parse a JSON array of objects into records.
///
/// Every value must be a JSON string; the error names the path of the first
/// value that is not (e.g. `[1].score`).
pub fn parse_records(records_json: &str) -> Result<Vec<Record>> {
    let de = &mut serde_json::Deserializer::from_str(records_json);
    serde_path_to_error::deserialize(de).context("Failed to parse records JSON")
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).context("Failed to serialize result")
}

/// [`clean_rows`](cleaning::clean_rows) over a JSON records string.
pub fn clean_rows_json(records_json: &str) -> Result<String> {
    let records = parse_records(records_json)?;
    let result = cleaning::clean_rows(&records).context("clean_rows failed")?;
    to_json(&result)
}

/// [`clean_rows_efficient`](cleaning::clean_rows_efficient) over a JSON records string.
pub fn clean_rows_efficient_json(records_json: &str) -> Result<String> {
    let records = parse_records(records_json)?;
    let result =
        cleaning::clean_rows_efficient(&records).context("clean_rows_efficient failed")?;
    to_json(&result)
}

/// [`filter_high_scores`](filtering::filter_high_scores) over a JSON records string.
pub fn filter_high_scores_json(records_json: &str, threshold: i64) -> Result<String> {
    let records = parse_records(records_json)?;
    let result = filtering::filter_high_scores(&records, threshold)
        .context("filter_high_scores failed")?;
    to_json(&result)
}

/// [`clean_sales_data`](cleaning::clean_sales_data) over a JSON records string.
///
/// JSON numbers cannot hold `inf` or `nan`, so a cleaned amount that is not
/// finite is an error here rather than being written as `null`.
pub fn clean_sales_data_json(records_json: &str) -> Result<String> {
    let records = parse_records(records_json)?;
    let result = cleaning::clean_sales_data(&records).context("clean_sales_data failed")?;
    if let Some(row) = result.iter().position(|r| !r.amount.is_finite()) {
        bail!(
            "Failed to serialize result: cleaned row {} has non-finite amount {}",
            row,
            result[row].amount
        );
    }
    to_json(&result)
}

/// [`filter_transactions`](filtering::filter_transactions) over a JSON records string.
pub fn filter_transactions_json(records_json: &str, threshold: i64) -> Result<String> {
    let records = parse_records(records_json)?;
    let result = filtering::filter_transactions(&records, threshold)
        .context("filter_transactions failed")?;
    to_json(&result)
}

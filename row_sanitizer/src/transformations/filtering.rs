use log::debug;

use crate::config::{SalesColumns, ScoreColumns};
use crate::error::SanitizeResult;
use crate::record::{field, non_empty_trimmed, parse_int, Record};

/// Names of players whose integer score is at least `threshold`
///
/// Rows with an empty `score` are skipped. Names are trimmed.
pub fn filter_high_scores(records: &[Record], threshold: i64) -> SanitizeResult<Vec<String>> {
    filter_high_scores_with(records, threshold, &ScoreColumns::default())
}

/// [`filter_high_scores`] over custom column names.
pub fn filter_high_scores_with(
    records: &[Record],
    threshold: i64,
    columns: &ScoreColumns,
) -> SanitizeResult<Vec<String>> {
    let mut names = Vec::new();

    for (row, record) in records.iter().enumerate() {
        let Some(raw_score) = non_empty_trimmed(record, row, &columns.score)? else {
            continue;
        };
        let score = parse_int(raw_score, row, &columns.score)?;
        if score >= threshold {
            names.push(field(record, row, &columns.name)?.trim().to_string());
        }
    }

    debug!(
        "filter_high_scores: {} of {} rows at or above {}",
        names.len(),
        records.len(),
        threshold
    );
    Ok(names)
}

/// Ids of completed transactions whose amount is at least `threshold`
///
/// The amount is parsed as an integer, so a fractional amount such as
/// `"10.5"` is a format error here even though
/// [`clean_sales_data`](super::cleaning::clean_sales_data) accepts it.
/// `status` must equal `"complete"` exactly (no trimming).
pub fn filter_transactions(records: &[Record], threshold: i64) -> SanitizeResult<Vec<String>> {
    filter_transactions_with(records, threshold, &SalesColumns::default())
}

/// [`filter_transactions`] over custom column names and completion status.
pub fn filter_transactions_with(
    records: &[Record],
    threshold: i64,
    columns: &SalesColumns,
) -> SanitizeResult<Vec<String>> {
    let mut ids = Vec::new();

    for (row, record) in records.iter().enumerate() {
        let Some(raw_amount) = non_empty_trimmed(record, row, &columns.amount)? else {
            continue;
        };
        let amount = parse_int(raw_amount, row, &columns.amount)?;
        if amount >= threshold && field(record, row, &columns.status)? == columns.complete_status {
            ids.push(field(record, row, &columns.id)?.trim().to_string());
        }
    }

    debug!(
        "filter_transactions: {} of {} rows complete and at or above {}",
        ids.len(),
        records.len(),
        threshold
    );
    Ok(ids)
}

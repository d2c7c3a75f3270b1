use log::{debug, warn};

use crate::config::{SalesColumns, ScoreColumns};
use crate::error::{SanitizeError, SanitizeResult};
use crate::models::{CleanedSalesRecord, CleanedScoreRecord};
use crate::record::{field, non_empty_trimmed, parse_float, parse_int, Record};

/// Clean score rows: trim text fields and coerce `score` to an integer.
///
/// Rows whose trimmed `score` is empty are dropped. A non-numeric `score`
/// fails the whole call.
///
/// An empty `name` or `city` takes the value from the most recent earlier
/// row in the same call. If no earlier row supplied one, the call fails with
/// [`SanitizeError::EmptyField`].
///
/// # Examples
///
/// ```
/// use row_sanitizer::record::record;
/// use row_sanitizer::transformations::clean_rows;
///
/// let rows = vec![
///     record(&[("name", " Alice "), ("score", " 90"), ("city", "Austin")]),
///     record(&[("name", "Bob"), ("score", ""), ("city", "Dallas")]),
/// ];
/// let cleaned = clean_rows(&rows).unwrap();
/// assert_eq!(cleaned.len(), 1);
/// assert_eq!(cleaned[0].name, "Alice");
/// assert_eq!(cleaned[0].score, 90);
/// ```
pub fn clean_rows(records: &[Record]) -> SanitizeResult<Vec<CleanedScoreRecord>> {
    clean_rows_with(records, &ScoreColumns::default())
}

/// [`clean_rows`] over custom column names.
pub fn clean_rows_with(
    records: &[Record],
    columns: &ScoreColumns,
) -> SanitizeResult<Vec<CleanedScoreRecord>> {
    let mut cleaned = Vec::with_capacity(records.len());
    let mut last_name: Option<&str> = None;
    let mut last_city: Option<&str> = None;

    for (row, record) in records.iter().enumerate() {
        let Some(raw_score) = non_empty_trimmed(record, row, &columns.score)? else {
            debug!("clean_rows: skipping row {} with empty '{}'", row, columns.score);
            continue;
        };
        let score = parse_int(raw_score, row, &columns.score)?;

        let name = carry_forward(record, row, &columns.name, &mut last_name)?;
        let city = carry_forward(record, row, &columns.city, &mut last_city)?;

        cleaned.push(CleanedScoreRecord::new(name, score, city));
    }

    debug!("clean_rows: kept {} of {} rows", cleaned.len(), records.len());
    Ok(cleaned)
}

/// Trimmed value of a text field, or the last value seen for it when empty.
fn carry_forward<'a>(
    record: &'a Record,
    row: usize,
    name: &str,
    last: &mut Option<&'a str>,
) -> SanitizeResult<&'a str> {
    let raw = field(record, row, name)?;
    if !raw.is_empty() {
        *last = Some(raw.trim());
    } else if let Some(previous) = last {
        warn!(
            "clean_rows: row {} has empty '{}', reusing {:?} from an earlier row",
            row, name, previous
        );
    }

    (*last).ok_or_else(|| SanitizeError::EmptyField {
        row,
        field: name.to_string(),
    })
}

/// Clean score rows, keeping only fully populated rows with a non-zero score.
///
/// Unlike [`clean_rows`], a row is kept only when the parsed score is
/// non-zero and both `name` and `city` are non-empty. Kept rows carry the
/// original, untrimmed `name` and `city`. A score of exactly `0` is dropped
/// here but kept by [`clean_rows`].
pub fn clean_rows_efficient(records: &[Record]) -> SanitizeResult<Vec<CleanedScoreRecord>> {
    clean_rows_efficient_with(records, &ScoreColumns::default())
}

/// [`clean_rows_efficient`] over custom column names.
pub fn clean_rows_efficient_with(
    records: &[Record],
    columns: &ScoreColumns,
) -> SanitizeResult<Vec<CleanedScoreRecord>> {
    let mut cleaned = Vec::new();

    for (row, record) in records.iter().enumerate() {
        let Some(raw_score) = non_empty_trimmed(record, row, &columns.score)? else {
            continue;
        };
        let score = parse_int(raw_score, row, &columns.score)?;
        if score == 0 {
            continue;
        }

        let name = field(record, row, &columns.name)?;
        if name.is_empty() {
            continue;
        }
        let city = field(record, row, &columns.city)?;
        if city.is_empty() {
            continue;
        }

        cleaned.push(CleanedScoreRecord::new(name, score, city));
    }

    debug!(
        "clean_rows_efficient: kept {} of {} rows",
        cleaned.len(),
        records.len()
    );
    Ok(cleaned)
}

/// Clean sales rows: trim `customer` and `date`, coerce `amount` to a float.
///
/// Rows whose trimmed `amount` is empty are dropped. A non-numeric `amount`
/// fails the whole call.
pub fn clean_sales_data(records: &[Record]) -> SanitizeResult<Vec<CleanedSalesRecord>> {
    clean_sales_data_with(records, &SalesColumns::default())
}

/// [`clean_sales_data`] over custom column names.
pub fn clean_sales_data_with(
    records: &[Record],
    columns: &SalesColumns,
) -> SanitizeResult<Vec<CleanedSalesRecord>> {
    let mut cleaned = Vec::with_capacity(records.len());

    for (row, record) in records.iter().enumerate() {
        let Some(raw_amount) = non_empty_trimmed(record, row, &columns.amount)? else {
            debug!("clean_sales_data: skipping row {} with empty '{}'", row, columns.amount);
            continue;
        };
        let amount = parse_float(raw_amount, row, &columns.amount)?;
        let customer = field(record, row, &columns.customer)?.trim();
        let date = field(record, row, &columns.date)?.trim();

        cleaned.push(CleanedSalesRecord::new(customer, amount, date));
    }

    debug!(
        "clean_sales_data: kept {} of {} rows",
        cleaned.len(),
        records.len()
    );
    Ok(cleaned)
}

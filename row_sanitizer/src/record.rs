//! Raw input records and the field coercion helpers shared by every operation.
//!
//! A [`Record`] is one row of untyped data, as it comes out of a delimited
//! text file: every value is a string. Operations never mutate records; they
//! read fields through the helpers below, which attach the row index to any
//! failure.

use std::collections::BTreeMap;

use crate::error::{NumericKind, SanitizeError, SanitizeResult};

/// One row of input data, keyed by field name.
pub type Record = BTreeMap<String, String>;

/// Look up a field, failing with [`SanitizeError::MissingField`] if absent.
pub fn field<'a>(record: &'a Record, row: usize, name: &str) -> SanitizeResult<&'a str> {
    record
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| SanitizeError::MissingField {
            row,
            field: name.to_string(),
        })
}

/// Trimmed value of a field, or `None` when it trims to the empty string.
///
/// The empty string is the skip sentinel: callers drop the row instead of
/// treating it as malformed.
pub fn non_empty_trimmed<'a>(
    record: &'a Record,
    row: usize,
    name: &str,
) -> SanitizeResult<Option<&'a str>> {
    let trimmed = field(record, row, name)?.trim();
    Ok(if trimmed.is_empty() { None } else { Some(trimmed) })
}

/// Parse an already-trimmed value as a base-10 integer.
///
/// Accepts an optional `+`/`-` sign followed by ASCII digits and must fit in
/// an `i64`. Digit-group underscores (`"1_000"`) are rejected as a format
/// error.
pub fn parse_int(value: &str, row: usize, name: &str) -> SanitizeResult<i64> {
    value.parse::<i64>().map_err(|_| SanitizeError::Format {
        row,
        field: name.to_string(),
        value: value.to_string(),
        expected: NumericKind::Integer,
    })
}

/// Parse an already-trimmed value as a floating-point number.
///
/// Accepts what [`f64::from_str`](std::str::FromStr) accepts: decimals,
/// exponents, `inf` and `nan`. Digit-group underscores (`"1_0.5"`) are
/// rejected as a format error.
pub fn parse_float(value: &str, row: usize, name: &str) -> SanitizeResult<f64> {
    value.parse::<f64>().map_err(|_| SanitizeError::Format {
        row,
        field: name.to_string(),
        value: value.to_string(),
        expected: NumericKind::Float,
    })
}

/// Build a [`Record`] from field/value pairs.
///
/// # Examples
///
/// ```
/// use row_sanitizer::record::record;
///
/// let r = record(&[("name", " Alice "), ("score", "90")]);
/// assert_eq!(r["name"], " Alice ");
/// ```
pub fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

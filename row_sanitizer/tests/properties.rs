//! Property tests for ordering, blank skipping, trimming and thresholds.

use proptest::prelude::*;
use row_sanitizer::record::record;
use row_sanitizer::transformations::{
    clean_rows, clean_rows_efficient, clean_sales_data, filter_high_scores, filter_transactions,
};
use row_sanitizer::Record;

fn padding() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", " ", "  ", "\t", " \t "]).prop_map(str::to_string)
}

/// Non-empty text with interior spaces but no surrounding whitespace.
fn word() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,6}( [A-Za-z]{1,6})?"
}

/// Either a padded integer or a blank sentinel.
fn score_cell() -> impl Strategy<Value = Option<i64>> {
    prop::option::weighted(0.7, -1000i64..1000)
}

prop_compose! {
    fn score_row()(
        name in word(),
        city in word(),
        score in score_cell(),
        lpad in padding(),
        rpad in padding(),
    ) -> (Record, Option<i64>, String, String) {
        let raw_score = match score {
            Some(s) => format!("{}{}{}", lpad, s, rpad),
            None => format!("{}{}", lpad, rpad),
        };
        let row = record(&[
            ("name", format!("{}{}{}", lpad, name, rpad).as_str()),
            ("score", raw_score.as_str()),
            ("city", format!("{}{}", rpad, city).as_str()),
        ]);
        (row, score, name, city)
    }
}

prop_compose! {
    fn sales_row()(
        id in word(),
        customer in word(),
        amount in prop::option::weighted(0.7, -1000i64..1000),
        complete in any::<bool>(),
        pad in padding(),
    ) -> (Record, Option<i64>, bool, String, String) {
        let raw_amount = amount.map(|a| format!("{}{}{}", pad, a, pad)).unwrap_or_else(|| pad.clone());
        let row = record(&[
            ("id", format!("{}{}", pad, id).as_str()),
            ("customer", format!("{}{}{}", pad, customer, pad).as_str()),
            ("amount", raw_amount.as_str()),
            ("date", format!("{}2025-01-01", pad).as_str()),
            ("status", if complete { "complete" } else { "pending" }),
        ]);
        (row, amount, complete, id, customer)
    }
}

proptest! {
    #[test]
    fn prop_clean_rows_skips_blanks_preserves_order_and_trims(
        rows in prop::collection::vec(score_row(), 0..20)
    ) {
        let records: Vec<Record> = rows.iter().map(|r| r.0.clone()).collect();
        let expected: Vec<(String, i64, String)> = rows
            .iter()
            .filter_map(|(_, score, name, city)| score.map(|s| (name.clone(), s, city.clone())))
            .collect();

        let cleaned = clean_rows(&records).unwrap();
        let actual: Vec<(String, i64, String)> = cleaned
            .into_iter()
            .map(|c| (c.name, c.score, c.city))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_clean_rows_efficient_is_subset_without_zero(
        rows in prop::collection::vec(score_row(), 0..20)
    ) {
        let records: Vec<Record> = rows.iter().map(|r| r.0.clone()).collect();
        let expected: Vec<i64> = rows
            .iter()
            .filter_map(|(_, score, _, _)| *score)
            .filter(|s| *s != 0)
            .collect();

        let scores: Vec<i64> = clean_rows_efficient(&records)
            .unwrap()
            .into_iter()
            .map(|c| c.score)
            .collect();
        prop_assert_eq!(scores, expected);
    }

    #[test]
    fn prop_filter_high_scores_matches_threshold(
        rows in prop::collection::vec(score_row(), 0..20),
        threshold in -1000i64..1000,
    ) {
        let records: Vec<Record> = rows.iter().map(|r| r.0.clone()).collect();
        let expected: Vec<String> = rows
            .iter()
            .filter(|(_, score, _, _)| score.map_or(false, |s| s >= threshold))
            .map(|(_, _, name, _)| name.clone())
            .collect();
        prop_assert_eq!(filter_high_scores(&records, threshold).unwrap(), expected);
    }

    #[test]
    fn prop_threshold_is_inclusive(value in -1000i64..1000) {
        let scores = vec![record(&[("name", "n"), ("score", value.to_string().as_str())])];
        prop_assert_eq!(filter_high_scores(&scores, value).unwrap().len(), 1);
        prop_assert!(filter_high_scores(&scores, value + 1).unwrap().is_empty());

        let txns = vec![record(&[("id", "t"), ("amount", value.to_string().as_str()), ("status", "complete")])];
        prop_assert_eq!(filter_transactions(&txns, value).unwrap().len(), 1);
        prop_assert!(filter_transactions(&txns, value + 1).unwrap().is_empty());
    }

    #[test]
    fn prop_sales_operations_skip_blanks_and_trim(
        rows in prop::collection::vec(sales_row(), 0..20),
        threshold in -1000i64..1000,
    ) {
        let records: Vec<Record> = rows.iter().map(|r| r.0.clone()).collect();

        let cleaned = clean_sales_data(&records).unwrap();
        let expected: Vec<(String, f64)> = rows
            .iter()
            .filter_map(|(_, amount, _, _, customer)| amount.map(|a| (customer.clone(), a as f64)))
            .collect();
        let actual: Vec<(String, f64)> = cleaned.iter().map(|c| (c.customer.clone(), c.amount)).collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(cleaned.iter().all(|c| c.date == "2025-01-01"));

        let expected_ids: Vec<String> = rows
            .iter()
            .filter(|(_, amount, complete, _, _)| *complete && amount.map_or(false, |a| a >= threshold))
            .map(|(_, _, _, id, _)| id.clone())
            .collect();
        prop_assert_eq!(filter_transactions(&records, threshold).unwrap(), expected_ids);
    }
}

//! Cleaned, typed output records.

use serde::{Deserialize, Serialize};

/// A score-domain row after trimming and integer coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedScoreRecord {
    pub name: String,
    pub score: i64,
    pub city: String,
}

impl CleanedScoreRecord {
    pub fn new(name: impl Into<String>, score: i64, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            city: city.into(),
        }
    }
}

/// A sales-domain row after trimming and float coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedSalesRecord {
    pub customer: String,
    pub amount: f64,
    pub date: String,
}

impl CleanedSalesRecord {
    pub fn new(customer: impl Into<String>, amount: f64, date: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            amount,
            date: date.into(),
        }
    }
}

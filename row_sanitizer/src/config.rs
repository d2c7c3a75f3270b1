//! Column mapping configuration.
//!
//! Operations read fixed field names by default (`name`, `score`, `city` for
//! scores; `customer`, `amount`, `date`, `id`, `status` for sales). A
//! [`SanitizerConfig`] maps those onto differently-named input columns and
//! can be loaded from a TOML file:
//!
//! ```toml
//! [scores]
//! name = "player"
//!
//! [sales]
//! amount = "total"
//! complete_status = "done"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{SanitizeError, SanitizeResult};

/// Full configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SanitizerConfig {
    #[serde(default)]
    pub scores: ScoreColumns,
    #[serde(default)]
    pub sales: SalesColumns,
}

/// Input column names for the score domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreColumns {
    pub name: String,
    pub score: String,
    pub city: String,
}

impl Default for ScoreColumns {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            score: "score".to_string(),
            city: "city".to_string(),
        }
    }
}

/// Input column names for the sales domain.
///
/// `complete_status` is the exact `status` value a transaction must carry to
/// pass `filter_transactions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesColumns {
    pub customer: String,
    pub amount: String,
    pub date: String,
    pub id: String,
    pub status: String,
    pub complete_status: String,
}

impl Default for SalesColumns {
    fn default() -> Self {
        Self {
            customer: "customer".to_string(),
            amount: "amount".to_string(),
            date: "date".to_string(),
            id: "id".to_string(),
            status: "status".to_string(),
            complete_status: "complete".to_string(),
        }
    }
}

impl SanitizerConfig {
    /// Parse configuration from TOML text. Missing tables and keys fall back
    /// to the defaults.
    pub fn from_toml_str(content: &str) -> SanitizeResult<Self> {
        toml::from_str(content).map_err(|e| {
            SanitizeError::Configuration(format!("Failed to parse config: {}", e))
        })
    }

    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(SanitizerConfig)` if successful
    /// * `Err(SanitizeError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> SanitizeResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            SanitizeError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded sanitizer config from {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SanitizerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SanitizerConfig::default());
        assert_eq!(config.sales.complete_status, "complete");
    }

    #[test]
    fn test_partial_override() {
        let config = SanitizerConfig::from_toml_str(
            r#"
            [scores]
            name = "player"

            [sales]
            amount = "total"
            complete_status = "done"
            "#,
        )
        .unwrap();

        assert_eq!(config.scores.name, "player");
        assert_eq!(config.scores.score, "score");
        assert_eq!(config.sales.amount, "total");
        assert_eq!(config.sales.customer, "customer");
        assert_eq!(config.sales.complete_status, "done");
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[scores]\ncity = \"town\"\n").unwrap();

        let config = SanitizerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.scores.city, "town");
    }

    #[test]
    fn test_invalid_config() {
        let err = SanitizerConfig::from_toml_str("[scores\nname = 1").unwrap_err();
        assert!(matches!(err, SanitizeError::Configuration(_)));

        let err = SanitizerConfig::from_file("/nonexistent/sanitizer.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}

//! Batch runs over a TOML file of cases
//!
//! ```toml
//! [[case]]
//! check = "email"
//! input = "john.doe@example.com"
//!
//! [[case]]
//! check = "length"
//! input = "ok"
//! min = 3
//! max = 10
//! ```
//!
//! A case without `input` runs against absent input. Length cases without
//! bounds fall back to the configured defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::checks::{run_check, CheckKind, CheckOutcome, LengthBounds};
use crate::config::LengthConfig;
use crate::error::{DataValidError, DataValidResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchFile {
    #[serde(default)]
    pub case: Vec<BatchCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchCase {
    pub check: String,
    pub input: Option<String>,
    pub min: Option<usize>,
    pub max: Option<usize>,
}

/// Summary of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<CheckOutcome>,
}

impl BatchReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl BatchFile {
    /// Parse a batch file from TOML text
    pub fn parse(content: &str, origin: &str) -> DataValidResult<Self> {
        let file: BatchFile = toml::from_str(content)
            .map_err(|e| DataValidError::batch(origin, e.to_string()))?;

        if file.case.is_empty() {
            warn!("Batch file {} contains no cases", origin);
        }

        Ok(file)
    }

    /// Read and parse a batch file
    pub async fn load<P: AsRef<Path>>(path: P) -> DataValidResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Run every case in order
    pub fn run(&self, defaults: &LengthConfig) -> DataValidResult<BatchReport> {
        let mut outcomes = Vec::with_capacity(self.case.len());

        for (index, case) in self.case.iter().enumerate() {
            let kind: CheckKind = case.check.parse()?;
            let bounds = (kind == CheckKind::Length).then(|| {
                LengthBounds::new(
                    case.min.unwrap_or(defaults.default_min),
                    case.max.unwrap_or(defaults.default_max),
                )
            });

            debug!("Batch case {}: {}", index, kind);
            outcomes.push(run_check(kind, case.input.as_deref(), bounds)?);
        }

        let failed = outcomes.iter().filter(|o| o.is_failure()).count();
        let passed = outcomes.iter().filter(|o| o.passed == Some(true)).count();

        info!(
            "Batch finished: {} cases, {} passed, {} failed",
            outcomes.len(),
            passed,
            failed
        );

        Ok(BatchReport {
            generated_at: Utc::now(),
            total: outcomes.len(),
            passed,
            failed,
            outcomes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[case]]
check = "email"
input = "john.doe@example.com"

[[case]]
check = "phone"
input = "abc123"

[[case]]
check = "title-case"
input = "john SMITH"

[[case]]
check = "length"

[[case]]
check = "length"
input = "ok"
min = 3
max = 10
"#;

    #[test]
    fn test_run_sample_batch() {
        let file = BatchFile::parse(SAMPLE, "sample.toml").unwrap();
        let report = file.run(&LengthConfig::default()).unwrap();

        assert_eq!(report.total, 5);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 2);
        assert!(!report.all_passed());

        assert_eq!(report.outcomes[2].output.as_deref(), Some("John Smith"));
        assert_eq!(report.outcomes[3].bounds, Some(LengthBounds::new(0, 255)));
        assert_eq!(report.outcomes[3].passed, Some(true));
        assert_eq!(report.outcomes[4].passed, Some(false));
    }

    #[test]
    fn test_unknown_check_fails_run() {
        let file = BatchFile::parse("[[case]]\ncheck = \"zip\"\n", "bad.toml").unwrap();
        let err = file.run(&LengthConfig::default()).unwrap_err();
        assert_eq!(err.category(), "dispatch");
    }

    #[test]
    fn test_malformed_file() {
        let err = BatchFile::parse("[[case]]\ninput = 3\n", "broken.toml").unwrap_err();
        assert_eq!(err.category(), "batch");
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_empty_file() {
        let file = BatchFile::parse("", "empty.toml").unwrap();
        let report = file.run(&LengthConfig::default()).unwrap();
        assert_eq!(report.total, 0);
        assert!(report.all_passed());
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases.toml");
        tokio::fs::write(&path, SAMPLE).await.unwrap();

        let file = BatchFile::load(&path).await.unwrap();
        assert_eq!(file.case.len(), 5);
    }
}

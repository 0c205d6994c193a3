//! Run any validation or formatting operation by name
//!
//! Used by the CLI and the demo to dispatch one operation and report its
//! result in a uniform, serializable shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{DataValidError, DataValidResult};
use crate::utils::{StringUtils, ValidationUtils};

/// The available operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    Email,
    Phone,
    Date,
    Digits,
    Title,
    Length,
}

impl CheckKind {
    pub const ALL: [CheckKind; 6] = [
        CheckKind::Email,
        CheckKind::Phone,
        CheckKind::Date,
        CheckKind::Digits,
        CheckKind::Title,
        CheckKind::Length,
    ];

    /// Validators answer yes/no; the rest transform their input
    pub fn is_validator(&self) -> bool {
        !matches!(self, CheckKind::Digits | CheckKind::Title)
    }

    fn label(&self) -> &'static str {
        match self {
            CheckKind::Email => "Email",
            CheckKind::Phone => "Phone",
            CheckKind::Date => "Date",
            CheckKind::Digits => "Digits",
            CheckKind::Title => "Title Case",
            CheckKind::Length => "Length",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckKind::Email => "email",
            CheckKind::Phone => "phone",
            CheckKind::Date => "date",
            CheckKind::Digits => "digits",
            CheckKind::Title => "title",
            CheckKind::Length => "length",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CheckKind {
    type Err = DataValidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(CheckKind::Email),
            "phone" | "phone-number" => Ok(CheckKind::Phone),
            "date" | "date-format" => Ok(CheckKind::Date),
            "digits" | "extract-digits" => Ok(CheckKind::Digits),
            "title" | "title-case" => Ok(CheckKind::Title),
            "length" => Ok(CheckKind::Length),
            _ => Err(DataValidError::UnknownCheck { name: s.to_string() }),
        }
    }
}

/// Inclusive length bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Result of a single operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub check: CheckKind,
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<LengthBounds>,
    /// Set for validators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,
    /// Set for transforms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl CheckOutcome {
    /// True when a validator rejected its input
    pub fn is_failure(&self) -> bool {
        self.check.is_validator() && self.passed == Some(false)
    }

    /// One-line rendering, e.g. `Email 'a@b.io': VALID`
    pub fn render_text(&self) -> String {
        let input = quoted(self.input.as_deref());
        let label = self.check.label();

        if !self.check.is_validator() {
            return format!("{} {}: {}", label, input, quoted(self.output.as_deref()));
        }

        let verdict = verdict(self.passed == Some(true));
        match &self.bounds {
            Some(bounds) => format!(
                "{} {} ({}-{}): {}",
                label, input, bounds.min, bounds.max, verdict
            ),
            None => format!("{} {}: {}", label, input, verdict),
        }
    }
}

/// Run `kind` against `input`
///
/// `bounds` is required for [`CheckKind::Length`] and ignored otherwise.
pub fn run_check(
    kind: CheckKind,
    input: Option<&str>,
    bounds: Option<LengthBounds>,
) -> DataValidResult<CheckOutcome> {
    debug!("Running {} check", kind);

    let mut outcome = CheckOutcome {
        check: kind,
        input: input.map(str::to_string),
        bounds: None,
        passed: None,
        output: None,
    };

    match kind {
        CheckKind::Email => outcome.passed = Some(ValidationUtils::is_valid_email(input)),
        CheckKind::Phone => outcome.passed = Some(ValidationUtils::is_valid_phone_number(input)),
        CheckKind::Date => outcome.passed = Some(ValidationUtils::is_valid_date_format(input)),
        CheckKind::Digits => outcome.output = Some(StringUtils::extract_digits(input)),
        CheckKind::Title => outcome.output = StringUtils::to_title_case(input),
        CheckKind::Length => {
            let bounds = bounds.ok_or_else(|| DataValidError::MissingArgument {
                check: kind.to_string(),
                argument: "min/max bounds".to_string(),
            })?;
            outcome.passed = Some(ValidationUtils::is_length_valid(input, bounds.min, bounds.max));
            outcome.bounds = Some(bounds);
        }
    }

    Ok(outcome)
}

fn quoted(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("'{}'", value),
        None => "<none>".to_string(),
    }
}

fn verdict(passed: bool) -> &'static str {
    if passed {
        "VALID"
    } else {
        "INVALID"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_kind() {
        assert_eq!("email".parse::<CheckKind>().unwrap(), CheckKind::Email);
        assert_eq!(" Title-Case ".parse::<CheckKind>().unwrap(), CheckKind::Title);
        assert_eq!("DATE-FORMAT".parse::<CheckKind>().unwrap(), CheckKind::Date);
        assert_eq!("phone-number".parse::<CheckKind>().unwrap(), CheckKind::Phone);

        let err = "zipcode".parse::<CheckKind>().unwrap_err();
        assert!(matches!(err, DataValidError::UnknownCheck { ref name } if name == "zipcode"));
    }

    #[test]
    fn test_display_parses_back() {
        for kind in CheckKind::ALL {
            assert_eq!(kind.to_string().parse::<CheckKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_outcome_fields_follow_check_role() {
        for kind in CheckKind::ALL {
            let outcome = run_check(kind, Some("abc"), Some(LengthBounds::new(0, 1))).unwrap();
            assert_eq!(outcome.passed.is_some(), kind.is_validator(), "{}", kind);
            assert_eq!(outcome.output.is_some(), !kind.is_validator(), "{}", kind);
        }
    }

    #[test]
    fn test_transform_never_fails() {
        let outcome = CheckOutcome {
            check: CheckKind::Digits,
            input: Some("abc".to_string()),
            bounds: None,
            passed: Some(false),
            output: Some(String::new()),
        };
        assert!(!outcome.is_failure());
        assert_eq!(outcome.render_text(), "Digits 'abc': ''");
    }

    #[test]
    fn test_validator_outcomes() {
        let outcome = run_check(CheckKind::Email, Some("john.doe@example.com"), None).unwrap();
        assert_eq!(outcome.passed, Some(true));
        assert_eq!(outcome.output, None);
        assert_eq!(outcome.render_text(), "Email 'john.doe@example.com': VALID");

        let outcome = run_check(CheckKind::Phone, Some("abc123"), None).unwrap();
        assert!(outcome.is_failure());
        assert_eq!(outcome.render_text(), "Phone 'abc123': INVALID");
    }

    #[test]
    fn test_transform_outcomes() {
        let outcome = run_check(CheckKind::Digits, Some("123-abc-456"), None).unwrap();
        assert_eq!(outcome.output.as_deref(), Some("123456"));
        assert!(!outcome.is_failure());
        assert_eq!(outcome.render_text(), "Digits '123-abc-456': '123456'");

        let outcome = run_check(CheckKind::Title, None, None).unwrap();
        assert_eq!(outcome.output, None);
        assert_eq!(outcome.render_text(), "Title Case <none>: <none>");
    }

    #[test]
    fn test_length_requires_bounds() {
        let err = run_check(CheckKind::Length, Some("ok"), None).unwrap_err();
        assert_eq!(err.category(), "dispatch");

        let outcome =
            run_check(CheckKind::Length, Some("ok"), Some(LengthBounds::new(3, 10))).unwrap();
        assert!(outcome.is_failure());
        assert_eq!(outcome.render_text(), "Length 'ok' (3-10): INVALID");
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = run_check(CheckKind::Date, Some("2024-02-30"), None).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["check"], "date");
        assert_eq!(json["passed"], true);
        assert!(json.get("output").is_none());
        assert!(json.get("bounds").is_none());
    }
}

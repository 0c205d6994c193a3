//! Sample-driven demonstration of every operation

use crate::checks::{run_check, CheckKind, LengthBounds};
use crate::error::DataValidResult;
use crate::utils::StringUtils;

pub const EMAIL_SAMPLES: &[&str] = &["john.doe@example.com", "invalid-email", "user@domain", ""];

pub const PHONE_SAMPLES: &[&str] = &["+573001234567", "3001234567", "abc123", "123-456-7890"];

pub const FORMATTING_SAMPLES: &[&str] = &["john SMITH", "123-abc-456", "HELLO world"];

pub const LENGTH_SAMPLES: &[&str] = &["short", "this is too long", "ok"];

pub const LENGTH_BOUNDS: LengthBounds = LengthBounds { min: 3, max: 10 };

/// Build the demo report, one entry per output line
pub fn render() -> DataValidResult<Vec<String>> {
    let mut lines = vec!["=== Data Validation Utility Demo ===".to_string(), String::new()];

    lines.push("Email Validation:".to_string());
    for &sample in EMAIL_SAMPLES {
        lines.push(run_check(CheckKind::Email, Some(sample), None)?.render_text());
    }

    lines.push(String::new());
    lines.push("Phone Number Validation:".to_string());
    for &sample in PHONE_SAMPLES {
        lines.push(run_check(CheckKind::Phone, Some(sample), None)?.render_text());
    }

    lines.push(String::new());
    lines.push("Data Formatting:".to_string());
    for &sample in FORMATTING_SAMPLES {
        lines.push(format_line(sample));
    }

    lines.push(String::new());
    lines.push("Length Validation:".to_string());
    for &sample in LENGTH_SAMPLES {
        lines.push(run_check(CheckKind::Length, Some(sample), Some(LENGTH_BOUNDS))?.render_text());
    }

    Ok(lines)
}

fn format_line(input: &str) -> String {
    format!(
        "Input: '{}' -> Title Case: '{}', Digits: '{}'",
        input,
        StringUtils::to_title_case(input).unwrap_or_default(),
        StringUtils::extract_digits(input)
    )
}

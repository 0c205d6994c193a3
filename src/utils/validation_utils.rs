use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::string_utils::StringUtils;

/// Local part, `@`, domain, then a dotted alphabetic TLD of two or more letters
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Optional leading plus followed by 7 to 15 digits
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9]{7,15}$").expect("phone pattern is a valid regex")
});

/// `YYYY-MM-DD` shape only
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is a valid regex")
});

/// Validation utility functions
///
/// Every check accepts either a `&str` or an `Option<&str>`; `None` is treated
/// as absent input and never matches a pattern.
pub struct ValidationUtils;

impl ValidationUtils {
    /// Validate email format
    ///
    /// The input is trimmed of spaces and ASCII control characters before
    /// matching. Absent, empty and whitespace-only input is rejected.
    pub fn is_valid_email<'a>(email: impl Into<Option<&'a str>>) -> bool {
        match email.into() {
            Some(email) if !StringUtils::is_blank(email) => {
                EMAIL_PATTERN.is_match(StringUtils::trim(email))
            }
            _ => false,
        }
    }

    /// Validate phone number format
    ///
    /// Everything except ASCII digits and `+` is stripped first, so separators
    /// such as `-`, spaces or parentheses never reject a number by themselves.
    pub fn is_valid_phone_number<'a>(phone: impl Into<Option<&'a str>>) -> bool {
        let phone = match phone.into() {
            Some(phone) if !StringUtils::is_blank(phone) => phone,
            _ => return false,
        };

        let cleaned = Self::clean_phone_number(phone);
        trace!(
            "Phone input of {} chars cleaned to {} chars",
            phone.chars().count(),
            cleaned.len()
        );

        PHONE_PATTERN.is_match(&cleaned)
    }

    /// Validate `YYYY-MM-DD` date shape
    ///
    /// Calendar correctness is not checked: `2024-02-30` is accepted.
    pub fn is_valid_date_format<'a>(date: impl Into<Option<&'a str>>) -> bool {
        match date.into() {
            Some(date) if !StringUtils::is_blank(date) => {
                DATE_PATTERN.is_match(StringUtils::trim(date))
            }
            _ => false,
        }
    }

    /// Validate that the character count lies within `[min_length, max_length]`
    ///
    /// Absent input counts as valid only when `min_length` is zero. Bounds are
    /// taken as given; an inverted range matches nothing.
    pub fn is_length_valid<'a>(
        input: impl Into<Option<&'a str>>,
        min_length: usize,
        max_length: usize,
    ) -> bool {
        match input.into() {
            None => min_length == 0,
            Some(input) => {
                let length = input.chars().count();
                length >= min_length && length <= max_length
            }
        }
    }

    /// Keep ASCII digits and `+` in their original order
    pub(crate) fn clean_phone_number(phone: &str) -> String {
        phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect()
    }
}

//! Validation and formatting helpers
//!
//! Everything here is stateless: the compiled patterns are built once on
//! first use and shared read-only across threads.

pub mod string_utils;
pub mod validation_utils;

pub use string_utils::StringUtils;
pub use validation_utils::ValidationUtils;

//! datavalid - validation and formatting helpers for textual input
//!
//! This library provides:
//! - Pattern validators for email, phone number and `YYYY-MM-DD` date shape
//! - Digit extraction and title-case formatting
//! - Inclusive length-bound checks
//! - Name-based dispatch, batch runs and a sample demo for the binaries
//!
//! Every operation accepts either `&str` or `Option<&str>`; `None` is absent
//! input, which is handled as a normal case rather than an error.

pub mod batch;
pub mod checks;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod utils;

// Re-export main types for convenience
pub use crate::checks::{run_check, CheckKind, CheckOutcome, LengthBounds};
pub use crate::config::AppConfig;
pub use crate::error::{DataValidError, DataValidResult};
pub use crate::utils::{StringUtils, ValidationUtils};

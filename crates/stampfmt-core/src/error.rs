//! Error types for stampfmt
//!
//! This module defines the error types used throughout the stampfmt library.
//! All errors are derived from `thiserror` for convenient error handling
//! and automatic `From` implementations.
//!
//! The formatting entry points never surface these errors: an unparseable
//! input is rendered as [`crate::formatter::INVALID_DATE`] instead. They are
//! returned by the strict parsing API, timezone resolution and the CLI.
//!
//! # Example
//!
//! ```
//! use stampfmt_core::error::{StampfmtError, Result};
//!
//! fn example_function() -> Result<()> {
//!     // This will automatically convert io::Error to StampfmtError
//!     let _file = std::fs::read_to_string("nonexistent.txt")?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for stampfmt operations
#[derive(Error, Debug)]
pub enum StampfmtError {
    /// The input could not be interpreted as a calendar date-time
    #[error("Invalid date-time: {0}")]
    InvalidDateTime(String),

    /// Invalid timezone
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in stampfmt
///
/// # Example
///
/// ```
/// use stampfmt_core::Result;
///
/// fn render() -> Result<String> {
///     Ok("1/15/2023, 10:30:00 AM".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, StampfmtError>;

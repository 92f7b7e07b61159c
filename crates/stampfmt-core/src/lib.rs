//! Core parsing and formatting for stampfmt
//!
//! This crate turns a date-time value (ISO-8601 text, epoch milliseconds or a
//! `chrono` instant) into one of two display strings: a short `en-US` form and
//! a verbose detailed form. Formatting never fails; input that is not a
//! calendar date-time renders as [`formatter::INVALID_DATE`].
//!
//! # Examples
//!
//! ```
//! use stampfmt_core::{DateTimeFormatter, TimezoneConfig};
//!
//! let formatter = DateTimeFormatter::new(TimezoneConfig::from_cli(Some("America/New_York"), false)?);
//! assert_eq!(formatter.format_short("2023-01-15T10:30:00Z"), "1/15/2023, 5:30:00 AM");
//! # Ok::<(), stampfmt_core::StampfmtError>(())
//! ```

pub mod error;
pub mod formatter;
pub mod parse;
pub mod timezone;
pub mod types;

// Re-export commonly used types
pub use error::{Result, StampfmtError};
pub use formatter::{DateTimeFormatter, INVALID_DATE, format_detailed, format_short};
pub use timezone::TimezoneConfig;
pub use types::{DateTimeInput, FormatStyle, FormattedTimestamp};

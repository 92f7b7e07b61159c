//! stampfmt - Render timestamps as short en-US or verbose display strings
//!
//! This library provides functionality to:
//! - Parse ISO-8601, RFC 2822, epoch-millisecond and already-rendered inputs
//! - Render a short `en-US` form (`1/15/2023, 10:30:00 AM`)
//! - Render a detailed form (`Sun Jan 15 2023 10:30:00 GMT+0000 (UTC)`)
//! - Report batches as plain lines, tables or JSON
//!
//! Unparseable input never raises an error from the formatting functions; it
//! renders as [`INVALID_DATE`].
//!
//! # Examples
//!
//! ```
//! use stampfmt::{DateTimeFormatter, INVALID_DATE};
//!
//! let formatter = DateTimeFormatter::utc();
//! assert_eq!(formatter.format_short("2023-01-15T10:30:00Z"), "1/15/2023, 10:30:00 AM");
//! assert_eq!(formatter.format_detailed("garbage"), INVALID_DATE);
//! ```

pub use stampfmt_core::{error, formatter, parse, timezone, types};

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use stampfmt_core::{
    DateTimeFormatter, DateTimeInput, FormatStyle, FormattedTimestamp, INVALID_DATE, Result,
    StampfmtError, TimezoneConfig, format_detailed, format_short,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

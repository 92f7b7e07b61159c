//! Core domain types for stampfmt
//!
//! These types describe what goes into the formatter (a [`DateTimeInput`]),
//! which rendering is wanted ([`FormatStyle`]) and what comes out for a batch
//! of inputs ([`FormattedTimestamp`]).

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StampfmtError;

/// A date-time value as handed over by a caller
///
/// Mirrors the shapes a date primitive accepts: a textual serialization, an
/// epoch-millisecond number, an already-constructed instant, or wall-clock
/// fields in the rendering zone.
///
/// # Examples
/// ```
/// use stampfmt_core::types::DateTimeInput;
///
/// let text = DateTimeInput::from("2023-01-15T10:30:00Z");
/// let millis = DateTimeInput::from(1_673_778_600_000_i64);
/// assert_eq!(text.to_string(), "2023-01-15T10:30:00Z");
/// assert_eq!(millis.to_string(), "1673778600000");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawInput")]
pub enum DateTimeInput {
    /// Textual serialization such as ISO-8601 or RFC 2822
    Text(String),
    /// Milliseconds since the Unix epoch
    EpochMillis(f64),
    /// An instant that needs no parsing
    Instant(DateTime<Utc>),
    /// Wall-clock fields interpreted in the rendering zone
    Local(NaiveDateTime),
    /// A value the caller could not decode; always renders as invalid
    Unrecognized(String),
}

/// JSON shape of an input: numbers are epoch milliseconds, strings are text
#[derive(Deserialize)]
#[serde(untagged)]
enum RawInput {
    Number(f64),
    Text(String),
}

impl From<RawInput> for DateTimeInput {
    fn from(raw: RawInput) -> Self {
        match raw {
            RawInput::Number(ms) => Self::EpochMillis(ms),
            RawInput::Text(s) => Self::Text(s),
        }
    }
}

impl From<&str> for DateTimeInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DateTimeInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for DateTimeInput {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for DateTimeInput {
    fn from(ms: i64) -> Self {
        Self::EpochMillis(ms as f64)
    }
}

impl From<f64> for DateTimeInput {
    fn from(ms: f64) -> Self {
        Self::EpochMillis(ms)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateTimeInput {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::Instant(dt.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for DateTimeInput {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Local(naive)
    }
}

impl fmt::Display for DateTimeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::EpochMillis(ms) => write!(f, "{}", ms),
            Self::Instant(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Self::Local(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::Unrecognized(raw) => write!(f, "{}", raw),
        }
    }
}

/// Which human-readable rendering to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// `1/15/2023, 10:30:00 AM`
    Short,
    /// `Sun Jan 15 2023 10:30:00 GMT+0000 (UTC)`
    Detailed,
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatStyle::Short => write!(f, "short"),
            FormatStyle::Detailed => write!(f, "detailed"),
        }
    }
}

impl FromStr for FormatStyle {
    type Err = StampfmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "short" => Ok(FormatStyle::Short),
            "detailed" => Ok(FormatStyle::Detailed),
            other => Err(StampfmtError::InvalidArgument(format!(
                "unknown format style '{}', expected 'short' or 'detailed'",
                other
            ))),
        }
    }
}

/// Both renderings of one input, as reported by the CLI
///
/// A rendering is `None` when it was not requested. `valid` is false when the
/// input could not be parsed, in which case requested renderings hold the
/// invalid-date sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTimestamp {
    /// The input as the caller supplied it
    pub input: String,
    /// Whether the input parsed into a calendar date-time
    pub valid: bool,
    /// Short rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    /// Detailed rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed: Option<String>,
}

impl FormattedTimestamp {
    /// Rendering for a single style, if it was produced
    pub fn get(&self, style: FormatStyle) -> Option<&str> {
        match style {
            FormatStyle::Short => self.short.as_deref(),
            FormatStyle::Detailed => self.detailed.as_deref(),
        }
    }
}

//! Turning caller input into an instant
//!
//! Text is recognized in the shapes a browser date primitive accepts and the
//! shapes this crate produces itself, so formatted output can be fed back in.
//! The first matching shape wins:
//!
//! 1. ISO-8601 with an offset or `Z` (`2023-01-15T10:30:00Z`)
//! 2. ISO date-only (`2023-01-15`, `2023-01`, `2023`), midnight UTC
//! 3. ISO date-time without offset, wall clock in the rendering zone
//! 4. RFC 2822 (`Sun, 15 Jan 2023 10:30:00 +0000`)
//! 5. Detailed form (`Sun Jan 15 2023 10:30:00 GMT+0000 (UTC)`)
//! 6. Short form (`1/15/2023, 10:30:00 AM`, `1/15/2023`), wall clock in the
//!    rendering zone

use chrono::{
    DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::{Result, StampfmtError};
use crate::types::DateTimeInput;

/// Largest magnitude of epoch milliseconds a date value may hold
pub const MAX_EPOCH_MILLIS: f64 = 8.64e15;

const ISO_OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
];

const ISO_LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

const SHORT_FORMATS: &[&str] = &[
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y, %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

const DETAILED_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Parse any supported input into an instant
///
/// `tz` is the zone wall-clock inputs are interpreted in. The only error is
/// [`StampfmtError::InvalidDateTime`].
pub fn parse_datetime(input: &DateTimeInput, tz: &Tz) -> Result<DateTime<Utc>> {
    match input {
        DateTimeInput::Text(s) => parse_text(s, tz),
        DateTimeInput::EpochMillis(ms) => from_epoch_millis(*ms),
        DateTimeInput::Instant(dt) => Ok(*dt),
        DateTimeInput::Local(naive) => resolve_local(naive, tz),
        DateTimeInput::Unrecognized(raw) => Err(invalid(raw)),
    }
}

/// Convert epoch milliseconds into an instant
///
/// Fractions truncate toward zero. Non-finite values and values outside
/// ±[`MAX_EPOCH_MILLIS`] or the calendar range are rejected.
pub fn from_epoch_millis(ms: f64) -> Result<DateTime<Utc>> {
    if !ms.is_finite() || ms.abs() > MAX_EPOCH_MILLIS {
        return Err(invalid(ms));
    }
    DateTime::from_timestamp_millis(ms.trunc() as i64).ok_or_else(|| invalid(ms))
}

/// Interpret wall-clock fields in `tz`
///
/// A time repeated by a backward transition resolves to its earlier instant.
/// A time skipped by a forward transition is read with the offset in force
/// before the transition, landing after the gap.
pub fn resolve_local(naive: &NaiveDateTime, tz: &Tz) -> Result<DateTime<Utc>> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let before = naive
                .checked_sub_signed(TimeDelta::days(1))
                .ok_or_else(|| invalid(naive))?;
            let offset = tz.offset_from_utc_datetime(&before).fix().local_minus_utc();
            debug!(
                "{} falls in a {} transition gap, using offset {}s",
                naive,
                tz.name(),
                offset
            );
            naive
                .checked_sub_signed(TimeDelta::seconds(i64::from(offset)))
                .map(|utc| Utc.from_utc_datetime(&utc))
                .ok_or_else(|| invalid(naive))
        }
    }
}

/// Parse a textual serialization
pub fn parse_text(raw: &str, tz: &Tz) -> Result<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(invalid(raw));
    }

    let iso = normalize_iso_separator(s);
    if let Some(dt) = parse_iso_with_offset(&iso) {
        return Ok(dt);
    }
    if let Some(date) = parse_iso_date_only(s) {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    if let Some(naive) = parse_with(&iso, ISO_LOCAL_FORMATS) {
        return resolve_local(&naive, tz);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Some(dt) = parse_detailed(s) {
        return Ok(dt);
    }
    if let Some(naive) = parse_short(s) {
        return resolve_local(&naive, tz);
    }

    debug!("Unrecognized date-time text: '{}'", s);
    Err(invalid(raw))
}

fn invalid(value: impl std::fmt::Display) -> StampfmtError {
    StampfmtError::InvalidDateTime(format!("'{}'", value))
}

/// `2023-01-15 10:30:00Z` is read the same as `2023-01-15T10:30:00Z`
fn normalize_iso_separator(s: &str) -> String {
    let bytes = s.as_bytes();
    if bytes.len() > 11
        && bytes[10] == b' '
        && bytes[..10].iter().all(|b| b.is_ascii_digit() || *b == b'-')
    {
        format!("{}T{}", &s[..10], &s[11..])
    } else {
        s.to_string()
    }
}

fn parse_iso_with_offset(s: &str) -> Option<DateTime<Utc>> {
    let with_offset = match s.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => s.to_string(),
    };
    ISO_OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&with_offset, fmt).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_iso_date_only(s: &str) -> Option<NaiveDate> {
    let is_shape = |pattern: &str| {
        s.len() == pattern.len()
            && s
                .bytes()
                .zip(pattern.bytes())
                .all(|(c, p)| if p == b'9' { c.is_ascii_digit() } else { c == p })
    };

    if is_shape("9999-99-99") {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
    } else if is_shape("9999-99") {
        NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok()
    } else if is_shape("9999") {
        s.parse().ok().and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
    } else {
        None
    }
}

fn parse_with(s: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn parse_detailed(s: &str) -> Option<DateTime<Utc>> {
    // The parenthesized zone name is informational only
    let without_name = match (s.rfind(" ("), s.ends_with(')')) {
        (Some(idx), true) => &s[..idx],
        _ => s,
    };
    DateTime::parse_from_str(without_name, DETAILED_FORMAT)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_short(s: &str) -> Option<NaiveDateTime> {
    parse_with(s, SHORT_FORMATS).or_else(|| {
        NaiveDate::parse_from_str(s, "%m/%d/%Y")
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN))
    })
}

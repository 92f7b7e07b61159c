//! Display formatting for timestamps
//!
//! Two renderings are provided:
//!
//! - **short**: `en-US` numeric form, `1/15/2023, 10:30:00 AM`
//! - **detailed**: verbose form with weekday, month, zero-padded day, year,
//!   24-hour time and a timezone descriptor,
//!   `Sun Jan 15 2023 10:30:00 GMT+0000 (UTC)`
//!
//! Formatting never fails. Input that does not parse renders as
//! [`INVALID_DATE`], so display code always gets a string back.
//!
//! # Examples
//!
//! ```
//! use stampfmt_core::formatter::{DateTimeFormatter, INVALID_DATE};
//!
//! let formatter = DateTimeFormatter::utc();
//! assert_eq!(
//!     formatter.format_short("2023-01-15T10:30:00Z"),
//!     "1/15/2023, 10:30:00 AM"
//! );
//! assert_eq!(
//!     formatter.format_detailed("2023-01-15T10:30:00Z"),
//!     "Sun Jan 15 2023 10:30:00 GMT+0000 (UTC)"
//! );
//! assert_eq!(formatter.format_short("garbage"), INVALID_DATE);
//! ```

use chrono::{DateTime, Datelike};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::Result;
use crate::parse::parse_datetime;
use crate::timezone::TimezoneConfig;
use crate::types::{DateTimeInput, FormatStyle, FormattedTimestamp};

/// Rendering of any input that is not a calendar date-time
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats timestamps in one configured timezone
///
/// `Default` renders in the system's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeFormatter {
    config: TimezoneConfig,
}

impl DateTimeFormatter {
    /// Create a formatter for the given timezone configuration
    pub fn new(config: TimezoneConfig) -> Self {
        Self { config }
    }

    /// Create a formatter that renders in UTC
    pub fn utc() -> Self {
        Self::new(TimezoneConfig::utc())
    }

    /// Get the timezone configuration
    pub fn timezone_config(&self) -> &TimezoneConfig {
        &self.config
    }

    /// Parse an input strictly, in the configured timezone
    ///
    /// This is the only entry point that reports unparseable input as an
    /// error instead of rendering [`INVALID_DATE`].
    pub fn parse(&self, input: impl Into<DateTimeInput>) -> Result<DateTime<Tz>> {
        let input = input.into();
        parse_datetime(&input, &self.config.tz).map(|dt| dt.with_timezone(&self.config.tz))
    }

    /// Render `1/15/2023, 10:30:00 AM`
    pub fn format_short(&self, input: impl Into<DateTimeInput>) -> String {
        self.format(FormatStyle::Short, input)
    }

    /// Render `Sun Jan 15 2023 10:30:00 GMT+0000 (UTC)`
    pub fn format_detailed(&self, input: impl Into<DateTimeInput>) -> String {
        self.format(FormatStyle::Detailed, input)
    }

    /// Render an input in the given style
    pub fn format(&self, style: FormatStyle, input: impl Into<DateTimeInput>) -> String {
        match self.parse(input) {
            Ok(dt) => render(style, &dt),
            Err(e) => {
                debug!("Rendering {} as invalid: {}", style, e);
                INVALID_DATE.to_string()
            }
        }
    }

    /// Render an input once per requested style
    ///
    /// The input is parsed a single time. Styles not listed stay `None`.
    pub fn format_all(
        &self,
        input: impl Into<DateTimeInput>,
        styles: &[FormatStyle],
    ) -> FormattedTimestamp {
        let input = input.into();
        let label = input.to_string();
        let parsed = self.parse(input);
        let valid = parsed.is_ok();
        if let Err(e) = &parsed {
            debug!("{}", e);
        }

        let rendered = |style: FormatStyle| {
            styles.contains(&style).then(|| match &parsed {
                Ok(dt) => render(style, dt),
                Err(_) => INVALID_DATE.to_string(),
            })
        };

        FormattedTimestamp {
            input: label,
            valid,
            short: rendered(FormatStyle::Short),
            detailed: rendered(FormatStyle::Detailed),
        }
    }
}

/// Render `1/15/2023, 10:30:00 AM` in the local timezone
pub fn format_short(input: impl Into<DateTimeInput>) -> String {
    DateTimeFormatter::default().format_short(input)
}

/// Render `Sun Jan 15 2023 10:30:00 GMT+0000 (UTC)` in the local timezone
pub fn format_detailed(input: impl Into<DateTimeInput>) -> String {
    DateTimeFormatter::default().format_detailed(input)
}

/// Whether a rendered string is the invalid-date sentinel
pub fn is_invalid(rendered: &str) -> bool {
    rendered == INVALID_DATE
}

/// Render an already-parsed date-time in the given style
pub fn render(style: FormatStyle, dt: &DateTime<Tz>) -> String {
    match style {
        FormatStyle::Short => render_short(dt),
        FormatStyle::Detailed => render_detailed(dt),
    }
}

/// Month, day and hour are not padded; years before 1 AD show the era year
pub fn render_short(dt: &DateTime<Tz>) -> String {
    format!(
        "{}/{}/{}, {}",
        dt.month(),
        dt.day(),
        short_year(dt.year()),
        dt.format("%-I:%M:%S %p")
    )
}

/// The zone descriptor is the numeric offset plus the tz database
/// abbreviation in force at that instant
pub fn render_detailed(dt: &DateTime<Tz>) -> String {
    format!(
        "{} {} {}",
        dt.format("%a %b %d"),
        detailed_year(dt.year()),
        dt.format("%H:%M:%S GMT%z (%Z)")
    )
}

/// Year 0 is 1 BC, year -1 is 2 BC
fn short_year(year: i32) -> i64 {
    if year <= 0 { 1 - i64::from(year) } else { i64::from(year) }
}

/// Sign, then the absolute year padded to four digits
fn detailed_year(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{:04}", year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn in_zone(name: &str) -> DateTimeFormatter {
        DateTimeFormatter::new(TimezoneConfig::from_cli(Some(name), false).unwrap())
    }

    #[test]
    fn test_short_utc() {
        let formatter = DateTimeFormatter::utc();
        assert_eq!(
            formatter.format_short("2023-01-15T10:30:00Z"),
            "1/15/2023, 10:30:00 AM"
        );
    }

    #[test]
    fn test_short_converts_to_configured_zone() {
        let formatter = in_zone("America/New_York");
        assert_eq!(
            formatter.format_short("2023-01-15T10:30:00Z"),
            "1/15/2023, 5:30:00 AM"
        );
    }

    #[test]
    fn test_short_midnight_and_noon() {
        let formatter = DateTimeFormatter::utc();
        assert_eq!(
            formatter.format_short("2023-12-05T00:05:09Z"),
            "12/5/2023, 12:05:09 AM"
        );
        assert_eq!(
            formatter.format_short("2023-12-05T12:00:00Z"),
            "12/5/2023, 12:00:00 PM"
        );
        assert_eq!(
            formatter.format_short("2023-12-05T23:59:59Z"),
            "12/5/2023, 11:59:59 PM"
        );
    }

    #[test]
    fn test_detailed_utc() {
        let formatter = DateTimeFormatter::utc();
        assert_eq!(
            formatter.format_detailed("2023-01-15T10:30:00Z"),
            "Sun Jan 15 2023 10:30:00 GMT+0000 (UTC)"
        );
    }

    #[test]
    fn test_detailed_named_zones() {
        assert_eq!(
            in_zone("America/New_York").format_detailed("2023-01-15T10:30:00Z"),
            "Sun Jan 15 2023 05:30:00 GMT-0500 (EST)"
        );
        assert_eq!(
            in_zone("America/New_York").format_detailed("2023-07-04T16:00:00Z"),
            "Tue Jul 04 2023 12:00:00 GMT-0400 (EDT)"
        );
        assert_eq!(
            in_zone("Asia/Tokyo").format_detailed("2023-01-15T10:30:00Z"),
            "Sun Jan 15 2023 19:30:00 GMT+0900 (JST)"
        );
    }

    #[test]
    fn test_detailed_pads_small_years() {
        let formatter = DateTimeFormatter::utc();
        assert_eq!(
            formatter.format_detailed("0999-03-01T00:00:00Z"),
            "Fri Mar 01 0999 00:00:00 GMT+0000 (UTC)"
        );
        assert_eq!(detailed_year(-1), "-0001");
        assert_eq!(detailed_year(-12345), "-12345");
        assert_eq!(detailed_year(2023), "2023");
    }

    #[test]
    fn test_years_before_common_era() {
        let formatter = DateTimeFormatter::utc();
        // 1 January of year -1, i.e. 2 BC
        let millis = -62_198_755_200_000_i64;
        assert_eq!(
            formatter.format_detailed(millis),
            "Fri Jan 01 -0001 00:00:00 GMT+0000 (UTC)"
        );
        assert_eq!(formatter.format_short(millis), "1/1/2, 12:00:00 AM");
        assert_eq!(short_year(0), 1);
        assert_eq!(short_year(2023), 2023);
    }

    #[test]
    fn test_epoch_past_calendar_range_renders_sentinel() {
        let formatter = DateTimeFormatter::utc();
        assert_eq!(formatter.format_detailed(8.64e15), INVALID_DATE);
        assert_eq!(formatter.format_short(-8.64e15), INVALID_DATE);
    }

    #[test]
    fn test_invalid_input_renders_sentinel() {
        let formatter = DateTimeFormatter::utc();
        for input in ["garbage", "not-a-date", ""] {
            assert_eq!(formatter.format_short(input), INVALID_DATE);
            assert_eq!(formatter.format_detailed(input), INVALID_DATE);
        }
        assert_eq!(formatter.format_short(f64::NAN), INVALID_DATE);
        assert!(is_invalid(&formatter.format_detailed(f64::INFINITY)));
    }

    #[test]
    fn test_strict_parse_reports_error() {
        let formatter = DateTimeFormatter::utc();
        assert!(formatter.parse("garbage").is_err());
        assert!(formatter.parse("2023-01-15T10:30:00Z").is_ok());
    }

    #[test]
    fn test_epoch_and_instant_inputs() {
        let formatter = DateTimeFormatter::utc();
        let expected = "1/15/2023, 10:30:00 AM";
        assert_eq!(formatter.format_short(1_673_778_600_000_i64), expected);
        assert_eq!(formatter.format_short(1_673_778_600_000.0), expected);
        let instant = Utc.with_ymd_and_hms(2023, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(formatter.format_short(instant), expected);
    }

    #[test]
    fn test_local_fields_input() {
        let naive = NaiveDate::from_ymd_opt(2023, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(
            in_zone("Europe/Paris").format_detailed(naive),
            "Sun Jan 15 2023 10:30:00 GMT+0100 (CET)"
        );
    }

    #[test]
    fn test_output_can_be_parsed_back() {
        let formatter = in_zone("America/New_York");
        let detailed = formatter.format_detailed("2023-01-15T10:30:00Z");
        let short = formatter.format_short("2023-01-15T10:30:00Z");
        assert_eq!(formatter.format_detailed(detailed.as_str()), detailed);
        assert_eq!(formatter.format_short(short.as_str()), short);
    }

    #[test]
    fn test_format_all() {
        let formatter = DateTimeFormatter::utc();
        let record = formatter.format_all(
            "2023-01-15T10:30:00Z",
            &[FormatStyle::Short, FormatStyle::Detailed],
        );
        assert!(record.valid);
        assert_eq!(record.input, "2023-01-15T10:30:00Z");
        assert_eq!(record.short.as_deref(), Some("1/15/2023, 10:30:00 AM"));
        assert_eq!(
            record.detailed.as_deref(),
            Some("Sun Jan 15 2023 10:30:00 GMT+0000 (UTC)")
        );

        let record = formatter.format_all("garbage", &[FormatStyle::Detailed]);
        assert!(!record.valid);
        assert_eq!(record.short, None);
        assert_eq!(record.detailed.as_deref(), Some(INVALID_DATE));
    }
}

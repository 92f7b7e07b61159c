//! Timezone utilities for date rendering
//!
//! This module decides which zone "local time" means when a timestamp is
//! rendered: an explicit zone from user input, UTC, or the system's local
//! timezone.

use chrono_tz::Tz;
use std::str::FromStr;
use tracing::debug;

use crate::error::{Result, StampfmtError};

/// Configuration for timezone handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneConfig {
    /// The timezone timestamps are rendered in
    pub tz: Tz,
    /// Whether the timezone is UTC
    pub is_utc: bool,
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        Self::from_tz(get_local_timezone())
    }
}

impl TimezoneConfig {
    /// Build a configuration for a known timezone
    pub fn from_tz(tz: Tz) -> Self {
        Self {
            is_utc: tz == Tz::UTC,
            tz,
        }
    }

    /// Configuration that renders everything in UTC
    pub fn utc() -> Self {
        Self::from_tz(Tz::UTC)
    }

    /// Create a new timezone configuration from CLI arguments
    pub fn from_cli(timezone_str: Option<&str>, use_utc: bool) -> Result<Self> {
        if use_utc {
            return Ok(Self::utc());
        }

        match timezone_str {
            Some(tz_str) => {
                let tz = Tz::from_str(tz_str).map_err(|_| {
                    StampfmtError::InvalidTimezone(format!(
                        "'{}'. Use format like 'America/New_York', 'Asia/Tokyo', or 'UTC'",
                        tz_str
                    ))
                })?;
                Ok(Self::from_tz(tz))
            }
            None => Ok(Self::default()),
        }
    }

    /// Get the display name for the configured timezone
    pub fn display_name(&self) -> &str {
        if self.is_utc { "UTC" } else { self.tz.name() }
    }
}

/// Detect the system's local timezone
///
/// The `TZ` environment variable wins when it names a known zone, then the
/// platform zone reported by `iana-time-zone`. Falls back to UTC.
pub fn get_local_timezone() -> Tz {
    #[allow(clippy::collapsible_if)]
    if let Ok(tz_str) = std::env::var("TZ") {
        // POSIX allows a leading ':' before a zone file name
        if let Ok(tz) = Tz::from_str(tz_str.trim_start_matches(':')) {
            debug!("Using timezone from TZ environment variable: {}", tz_str);
            return tz;
        }
    }

    match iana_time_zone::get_timezone() {
        Ok(tz_str) => match Tz::from_str(&tz_str) {
            Ok(tz) => {
                debug!("Using system timezone from iana-time-zone: {}", tz_str);
                tz
            }
            Err(_) => {
                debug!(
                    "Could not parse timezone from iana-time-zone: '{}', falling back to UTC",
                    tz_str
                );
                Tz::UTC
            }
        },
        Err(e) => {
            debug!(
                "Could not detect local timezone via iana-time-zone: {:?}, falling back to UTC",
                e
            );
            Tz::UTC
        }
    }
}

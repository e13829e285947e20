//! Local wall-clock context for a single query.
//!
//! The timezone collaborator hands back a 12-hour clock string such as
//! `"9:00 PM"`. Only the hour matters to the estimator; anything that does not
//! look like a 12-hour clock falls back to the reference hour.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{DEFAULT_FALLBACK_HOUR, DEFAULT_SUN_ALTITUDE, SUN_NAME};
use crate::sky::types::RawCelestialReading;

static CLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2}):(\d{2})\s*([ap])\.?m\b").expect("clock pattern is valid")
});

/// Hour and sun position the best-time estimator works from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTimeContext {
    /// Hour of day, 0-23.
    pub current_hour: u32,
    /// Sun altitude in degrees.
    pub sun_altitude: f64,
}

impl Default for LocalTimeContext {
    fn default() -> Self {
        Self {
            current_hour: DEFAULT_FALLBACK_HOUR,
            sun_altitude: DEFAULT_SUN_ALTITUDE,
        }
    }
}

impl LocalTimeContext {
    /// Build the context from the local-time text and the raw readings.
    pub fn from_readings(
        local_time_text: Option<&str>,
        readings: &[RawCelestialReading],
        fallback_hour: u32,
    ) -> Self {
        Self {
            current_hour: parse_local_hour(local_time_text).unwrap_or(fallback_hour % 24),
            sun_altitude: sun_altitude(readings),
        }
    }
}

/// Altitude of the first reading named "Sun", or deep night when absent.
pub fn sun_altitude(readings: &[RawCelestialReading]) -> f64 {
    readings
        .iter()
        .find(|reading| reading.name == SUN_NAME)
        .map(|reading| reading.altitude)
        .unwrap_or(DEFAULT_SUN_ALTITUDE)
}

/// Parse the hour (0-23) out of an `H:MM AM|PM` string.
///
/// Returns `None` when no 12-hour clock is found or the hour is out of range.
pub fn parse_local_hour(text: Option<&str>) -> Option<u32> {
    let captures = CLOCK_PATTERN.captures(text?)?;
    let hour: u32 = captures.get(1)?.as_str().parse().ok()?;
    let minutes: u32 = captures.get(2)?.as_str().parse().ok()?;
    if hour > 12 || minutes > 59 {
        return None;
    }

    let is_pm = captures
        .get(3)
        .is_some_and(|m| m.as_str().eq_ignore_ascii_case("p"));
    Some(hour % 12 + if is_pm { 12 } else { 0 })
}

/// Parse the hour, falling back to noon.
pub fn local_hour_or_default(text: Option<&str>) -> u32 {
    parse_local_hour(text).unwrap_or(DEFAULT_FALLBACK_HOUR)
}

/// Format a possibly fractional hour as a 12-hour clock, e.g. `21.5` -> `"9:30 PM"`.
///
/// The hour wraps modulo 24 and non-finite values render as midnight.
pub fn format_clock(hour: f64) -> String {
    let wrapped = if hour.is_finite() {
        hour.rem_euclid(24.0)
    } else {
        0.0
    };

    let mut total_minutes = (wrapped * 60.0).round() as i64;
    total_minutes = total_minutes.rem_euclid(24 * 60);
    let hour_of_day = (total_minutes / 60) as u32;
    let minutes = (total_minutes % 60) as u32;

    let suffix = if hour_of_day >= 12 { "PM" } else { "AM" };
    let display_hour = match hour_of_day % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minutes:02} {suffix}")
}

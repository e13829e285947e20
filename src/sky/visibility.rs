//! Twilight classification and "best time to view" estimation.
//!
//! These are narrative heuristics over positions computed upstream, not
//! ephemeris calculations. Every function here is total: any combination of
//! inputs, including NaN, yields a display string.

use serde::Serialize;

use crate::constants::*;
use crate::sky::local_time::{format_clock, local_hour_or_default};

/// Marker returned for the Sun while it is close to the meridian.
pub const NEAR_NOON: &str = "Now (near noon)";

/// Returned when an object is well placed at the moment of the query.
pub const NOW: &str = "Now";

pub const AFTER_SUNSET: &str = "After sunset";
pub const AFTER_DARK: &str = "After dark";

/// Brightness regime of the sky, classified from the Sun's altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkyRegime {
    /// Sun above civil twilight (-6°).
    Daytime,
    /// Sun between astronomical (-18°) and civil (-6°) twilight.
    Twilight,
    /// Sun at or below -18°.
    Night,
}

impl SkyRegime {
    pub fn from_sun_altitude(sun_altitude: f64) -> Self {
        if sun_altitude > CIVIL_TWILIGHT {
            SkyRegime::Daytime
        } else if sun_altitude > ASTRONOMICAL_TWILIGHT {
            SkyRegime::Twilight
        } else {
            // NaN lands here too: missing data is treated as night
            SkyRegime::Night
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkyRegime::Daytime => "daytime",
            SkyRegime::Twilight => "twilight",
            SkyRegime::Night => "night",
        }
    }
}

impl std::fmt::Display for SkyRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimate the best viewing time from the raw local-time text.
///
/// Unparseable or missing text falls back to noon.
pub fn estimate_best_time(
    altitude: f64,
    azimuth: f64,
    name: &str,
    local_time_text: Option<&str>,
    sun_altitude: f64,
) -> String {
    let current_hour = local_hour_or_default(local_time_text);
    best_time_for_hour(altitude, azimuth, name, current_hour, sun_altitude)
}

/// Estimate the best viewing time for an object given the current local hour.
pub fn best_time_for_hour(
    altitude: f64,
    azimuth: f64,
    name: &str,
    current_hour: u32,
    sun_altitude: f64,
) -> String {
    let hour = f64::from(current_hour);

    if name == SUN_NAME {
        return sun_best_time(azimuth, hour);
    }

    match SkyRegime::from_sun_altitude(sun_altitude) {
        SkyRegime::Daytime => {
            let hours = ((sun_altitude + 6.0) / DEGREES_PER_HOUR).round().max(1.0);
            if hours <= MAX_SUNSET_ESTIMATE_HOURS {
                format!("{AFTER_SUNSET} (~{})", format_clock(hour + hours))
            } else {
                AFTER_SUNSET.to_string()
            }
        }
        SkyRegime::Twilight => {
            let hours = ((sun_altitude + 18.0) / DEGREES_PER_HOUR).round().max(0.5);
            if hours <= MAX_DARK_ESTIMATE_HOURS {
                format!("{AFTER_DARK} (~{})", format_clock(hour + hours))
            } else {
                AFTER_DARK.to_string()
            }
        }
        SkyRegime::Night => night_best_time(altitude, azimuth, hour),
    }
}

fn sun_best_time(azimuth: f64, hour: f64) -> String {
    if (azimuth - TRANSIT_AZIMUTH).abs() < SUN_TRANSIT_WINDOW {
        NEAR_NOON.to_string()
    } else if azimuth < TRANSIT_AZIMUTH {
        let hours_to_transit = ((TRANSIT_AZIMUTH - azimuth) / DEGREES_PER_HOUR).round();
        format!("{} (local)", format_clock(hour + hours_to_transit))
    } else {
        format!("{} (local)", format_clock(hour - 1.0))
    }
}

fn night_best_time(altitude: f64, azimuth: f64, hour: f64) -> String {
    if altitude > ZENITH_ALTITUDE {
        return NOW.to_string();
    }
    if altitude > TRANSIT_ALTITUDE && (azimuth - TRANSIT_AZIMUTH).abs() < TRANSIT_WINDOW {
        return NOW.to_string();
    }

    if azimuth < TRANSIT_AZIMUTH {
        let hours_to_transit = ((TRANSIT_AZIMUTH - azimuth) / DEGREES_PER_HOUR)
            .round()
            .min(MAX_RISING_WAIT_HOURS);
        format_clock(hour + hours_to_transit)
    } else if altitude > SETTING_ALTITUDE {
        NOW.to_string()
    } else {
        format_clock(hour)
    }
}

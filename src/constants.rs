//! Application constants and default values.
//!
//! Thresholds used by the sky derivation core live next to the defaults for
//! the configuration file so every tunable has exactly one definition.

// # Application Metadata

/// Name used for the configuration directory and file.
pub const APP_NAME: &str = "tonights-sky";
pub const CONFIG_FILE_NAME: &str = "tonights-sky.toml";

// # Exit Codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

// # Collaborator Defaults

pub const DEFAULT_GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_ASTRONOMY_URL: &str = "https://api.visibleplanets.dev/v3";
pub const DEFAULT_SKYMAP_URL: &str = "https://virtualsky.lco.global/embed/index.html";
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 10; // seconds
pub const MINIMUM_REQUEST_TIMEOUT: u64 = 1;
pub const MAXIMUM_REQUEST_TIMEOUT: u64 = 120;
pub const DEFAULT_LOCAL_TIME: bool = true;

// # Local Time

/// Reference hour used when the local-time text is missing or unparseable.
pub const DEFAULT_FALLBACK_HOUR: u32 = 12;

/// Sun altitude assumed when the readings carry no Sun entry (deep night).
pub const DEFAULT_SUN_ALTITUDE: f64 = -90.0;

// # Sky Geometry

/// Name of the reading that seeds the sun altitude.
pub const SUN_NAME: &str = "Sun";

/// Azimuth of the local meridian (due south).
pub const TRANSIT_AZIMUTH: f64 = 180.0;

/// Nominal angular rate of the sky across the meridian, degrees per hour.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Width of one compass sector in degrees.
pub const COMPASS_SECTOR: f64 = 45.0;

// # Twilight Thresholds (sun altitude, degrees)

pub const CIVIL_TWILIGHT: f64 = -6.0;
pub const ASTRONOMICAL_TWILIGHT: f64 = -18.0;

// # Best-Time Heuristics

/// Sun within this many degrees of the meridian counts as "near noon".
pub const SUN_TRANSIT_WINDOW: f64 = 30.0;

/// Objects above this altitude are near the zenith.
pub const ZENITH_ALTITUDE: f64 = 60.0;

/// Objects above this altitude near the meridian are close to transit.
pub const TRANSIT_ALTITUDE: f64 = 40.0;
pub const TRANSIT_WINDOW: f64 = 45.0;

/// Setting objects still comfortably above this altitude are best viewed now.
pub const SETTING_ALTITUDE: f64 = 30.0;

/// Longest wait reported for a rising object at night.
pub const MAX_RISING_WAIT_HOURS: f64 = 2.0;

/// Waits longer than these collapse to a generic phrase.
pub const MAX_SUNSET_ESTIMATE_HOURS: f64 = 3.0;
pub const MAX_DARK_ESTIMATE_HOURS: f64 = 2.0;

// # Summary Caps

pub const SUMMARY_MAX_PLANETS: usize = 3;
pub const SUMMARY_MAX_CONSTELLATIONS: usize = 2;
pub const SUMMARY_STAR_LIMIT: usize = 5;

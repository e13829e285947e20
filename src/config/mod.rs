//! Configuration system for tonights-sky.
//!
//! All settings are optional: without a configuration file the application
//! talks to the public Open-Meteo geocoder and the visibleplanets.dev position
//! service, looks up the local time from the city's coordinates, and uses the
//! built-in planet descriptions.
//!
//! ## Configuration Source
//!
//! `tonights-sky.toml` is read from `$XDG_CONFIG_HOME/tonights-sky/`, or from the
//! directory given with `--config`. A missing file is not an error.
//!
//! ## Configuration Structure
//!
//! ```toml
//! #[Collaborators]
//! geocoder = "open-meteo"     # Select: "open-meteo" (network) or "offline" (bundled cities)
//! geocode_url = "https://geocoding-api.open-meteo.com/v1/search"
//! astronomy_url = "https://api.visibleplanets.dev/v3"
//! skymap_url = "https://virtualsky.lco.global/embed/index.html"
//! request_timeout = 10        # HTTP timeout in seconds (1-120)
//!
//! #[Local time]
//! local_time = true           # Look up the wall clock at the searched city
//! fallback_hour = 12          # Hour used when local time is unavailable (0-23)
//!
//! #[Derivation]
//! constellation_average = "streaming"  # Select: "streaming" (running pairwise) or "batch" (true mean)
//!
//! [descriptions]
//! Moon = "Our nearest neighbour, bright enough to cast shadows."
//! ```
//!
//! ## Validation
//!
//! Values are range-checked on load and URLs must use http or https. Invalid
//! files produce an error naming the offending field.

pub mod loading;
pub mod validation;

use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::constants::*;
use crate::sky::{AggregationMode, DescriptionTable, Transformer};

pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};

/// Which geocoding collaborator resolves city names.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GeocoderKind {
    /// Open-Meteo geocoding search over HTTP.
    OpenMeteo,
    /// Bundled world-city database, no network access.
    Offline,
}

impl GeocoderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeocoderKind::OpenMeteo => "open-meteo",
            GeocoderKind::Offline => "offline",
        }
    }
}

/// Configuration structure for tonights-sky.
///
/// Every field is optional; accessors resolve the effective value with the
/// defaults from [`crate::constants`].
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Geocoding collaborator.
    pub geocoder: Option<GeocoderKind>,
    /// Base URL of the Open-Meteo compatible geocoding search endpoint.
    pub geocode_url: Option<String>,
    /// Base URL of the planet positions endpoint.
    pub astronomy_url: Option<String>,
    /// Base URL of the embeddable sky-map widget.
    pub skymap_url: Option<String>,
    /// HTTP timeout in seconds.
    pub request_timeout: Option<u64>,
    /// Whether to look up the local wall clock at the searched coordinates.
    pub local_time: Option<bool>,
    /// Hour of day assumed when the local time is unavailable.
    pub fallback_hour: Option<u32>,
    /// How constellation positions are averaged.
    pub constellation_average: Option<AggregationMode>,
    /// Extra or replacement object descriptions, keyed by object name.
    #[serde(default)]
    pub descriptions: BTreeMap<String, String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        loading::load()
    }

    pub fn geocoder(&self) -> GeocoderKind {
        self.geocoder.unwrap_or(GeocoderKind::OpenMeteo)
    }

    pub fn geocode_url(&self) -> &str {
        self.geocode_url.as_deref().unwrap_or(DEFAULT_GEOCODE_URL)
    }

    pub fn astronomy_url(&self) -> &str {
        self.astronomy_url.as_deref().unwrap_or(DEFAULT_ASTRONOMY_URL)
    }

    pub fn skymap_url(&self) -> &str {
        self.skymap_url.as_deref().unwrap_or(DEFAULT_SKYMAP_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
    }

    pub fn local_time(&self) -> bool {
        self.local_time.unwrap_or(DEFAULT_LOCAL_TIME)
    }

    pub fn fallback_hour(&self) -> u32 {
        self.fallback_hour.unwrap_or(DEFAULT_FALLBACK_HOUR)
    }

    pub fn constellation_average(&self) -> AggregationMode {
        self.constellation_average.unwrap_or_default()
    }

    /// Build the derivation pipeline with this configuration injected.
    pub fn transformer(&self) -> Transformer {
        let descriptions = DescriptionTable::with_overrides(
            self.descriptions
                .iter()
                .map(|(name, text)| (name.clone(), text.clone())),
        );
        Transformer::new(descriptions, self.constellation_average(), self.fallback_hour())
    }

    /// Log the effective configuration.
    pub fn log_config(&self) {
        log_block_start!("Loaded configuration");
        log_indented!("Geocoder: {}", self.geocoder().as_str());
        if self.geocoder() == GeocoderKind::OpenMeteo {
            log_indented!("Geocode URL: {}", self.geocode_url());
        }
        log_indented!("Astronomy URL: {}", self.astronomy_url());
        log_indented!("Request timeout: {}s", self.request_timeout().as_secs());
        log_indented!(
            "Local time lookup: {}",
            if self.local_time() { "enabled" } else { "disabled" }
        );
        log_indented!("Fallback hour: {}:00", self.fallback_hour());
        log_indented!(
            "Constellation average: {}",
            self.constellation_average().as_str()
        );
        if !self.descriptions.is_empty() {
            log_indented!("Custom descriptions: {}", self.descriptions.len());
        }
    }
}

#[cfg(test)]
mod tests;

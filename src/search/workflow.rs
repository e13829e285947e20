//! Workflow orchestration for a city sky search.
//!
//! A search resolves the city, fetches the positions above it, looks up the
//! wall clock there, and hands everything to the derivation pipeline:
//!
//! 1. Trim the query and reject empty input
//! 2. Geocode the city to coordinates
//! 3. Fetch raw celestial readings for those coordinates
//! 4. Determine the local time (override, clock, or fallback hour)
//! 5. Derive sky objects and the highlight summary
//!
//! Failures of steps 1-3 end the search. A local-time failure only degrades
//! the best-time estimates to the fallback hour.

use chrono::{DateTime, Utc};

use super::SkyReport;
use crate::constants::DEFAULT_SKYMAP_URL;
use crate::services::{AstronomySource, Geocoder, LocalTimeProvider, ServiceError};
use crate::sky::{SkyRegime, Transformer, compose_summary};
use crate::skymap::SkyMapSettings;

/// Workflow orchestrator for sky searches.
pub struct SearchWorkflow<'a> {
    geocoder: &'a dyn Geocoder,
    astronomy: &'a dyn AstronomySource,
    clock: Option<&'a dyn LocalTimeProvider>,
    transformer: Transformer,
    time_override: Option<String>,
    skymap_url: String,
    debug_enabled: bool,
}

impl<'a> SearchWorkflow<'a> {
    /// Create a workflow without a clock, using the default transformer.
    pub fn new(geocoder: &'a dyn Geocoder, astronomy: &'a dyn AstronomySource) -> Self {
        Self {
            geocoder,
            astronomy,
            clock: None,
            transformer: Transformer::default(),
            time_override: None,
            skymap_url: DEFAULT_SKYMAP_URL.to_string(),
            debug_enabled: false,
        }
    }

    /// Look up the local time at the searched coordinates.
    pub fn with_clock(mut self, clock: &'a dyn LocalTimeProvider) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_transformer(mut self, transformer: Transformer) -> Self {
        self.transformer = transformer;
        self
    }

    /// Use this local-time text instead of asking the clock.
    pub fn with_time_override(mut self, local_time: Option<String>) -> Self {
        self.time_override = local_time;
        self
    }

    pub fn with_skymap_url(mut self, url: &str) -> Self {
        self.skymap_url = url.to_string();
        self
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug_enabled = enabled;
        self
    }

    /// Run a complete search for `city` at instant `now`.
    pub fn run(&self, city: &str, now: DateTime<Utc>) -> Result<SkyReport, ServiceError> {
        let query = city.trim();
        if query.is_empty() {
            return Err(ServiceError::EmptyQuery);
        }

        if self.debug_enabled {
            log_pipe!();
            log_debug!("Searching for '{}'", query);
        }

        let place = self.geocoder.geocode(query)?;
        if self.debug_enabled {
            log_indented!(
                "Resolved to {} ({:.4}°, {:.4}°)",
                place.name,
                place.latitude,
                place.longitude
            );
        }

        let readings = self
            .astronomy
            .positions(place.latitude, place.longitude, now)?;
        if self.debug_enabled {
            log_indented!("Received {} readings", readings.len());
        }

        let local_time = self.local_time(place.latitude, place.longitude, now);
        let context = self.transformer.context(&readings, local_time.as_deref());
        let objects = self.transformer.transform(&readings, local_time.as_deref());
        let summary = compose_summary(&objects);

        if self.debug_enabled {
            log_indented!("{} objects above the horizon", objects.len());
            log_indented!(
                "Reference hour {}:00, sun at {:.1}°",
                context.current_hour,
                context.sun_altitude
            );
        }

        let sky_map = SkyMapSettings::for_location(place.latitude, place.longitude);
        let sky_map_url = sky_map.embed_url(&self.skymap_url);

        Ok(SkyReport {
            city: place.name,
            lat: place.latitude,
            lon: place.longitude,
            local_time,
            reference_hour: context.current_hour,
            sun_altitude: context.sun_altitude,
            regime: SkyRegime::from_sun_altitude(context.sun_altitude),
            objects,
            summary,
            sky_map,
            sky_map_url,
        })
    }

    /// Resolve the local-time text, degrading to `None` on failure.
    fn local_time(&self, latitude: f64, longitude: f64, now: DateTime<Utc>) -> Option<String> {
        if let Some(text) = &self.time_override {
            return Some(text.clone());
        }

        let clock = self.clock?;
        match clock.local_time(latitude, longitude, now) {
            Ok(text) => Some(text),
            Err(e) => {
                log_pipe!();
                log_warning!("Local time unavailable, assuming the fallback hour");
                if self.debug_enabled
                    && let Some(detail) = e.detail()
                {
                    log_indented!("{}", detail);
                }
                None
            }
        }
    }
}

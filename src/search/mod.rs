//! City search: collaborators in, sky report out.
//!
//! [`SearchWorkflow`] wires a [`crate::services::Geocoder`], an
//! [`crate::services::AstronomySource`] and an optional
//! [`crate::services::LocalTimeProvider`] to the derivation pipeline in
//! [`crate::sky`]. [`Collaborators`] picks the concrete implementations from
//! the configuration and command-line switches.

pub mod report;
pub mod workflow;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use report::SkyReport;
pub use workflow::SearchWorkflow;

use crate::config::{Config, GeocoderKind};
use crate::services::{
    AstronomySource, Geocoder, LocalTimeProvider, OfflineGeocoder, OpenMeteoGeocoder, ReadingsFile,
    TimezoneClock, VisiblePlanetsSource,
};

/// Owned collaborators for one run of the application.
pub struct Collaborators {
    pub geocoder: Box<dyn Geocoder>,
    pub astronomy: Box<dyn AstronomySource>,
    pub clock: Option<Box<dyn LocalTimeProvider>>,
}

impl Collaborators {
    /// Select collaborators from configuration and command-line overrides.
    ///
    /// `offline` forces the bundled city database, and `readings_file`
    /// replaces the positions service with a saved response.
    pub fn from_config(config: &Config, offline: bool, readings_file: Option<PathBuf>) -> Result<Self> {
        let timeout = config.request_timeout();

        let geocoder: Box<dyn Geocoder> = if offline || config.geocoder() == GeocoderKind::Offline {
            Box::new(OfflineGeocoder::new())
        } else {
            Box::new(
                OpenMeteoGeocoder::new(config.geocode_url(), timeout)
                    .context("Failed to set up the geocoding client")?,
            )
        };

        let astronomy: Box<dyn AstronomySource> = match readings_file {
            Some(path) => Box::new(ReadingsFile::new(path)),
            None => Box::new(
                VisiblePlanetsSource::new(config.astronomy_url(), timeout)
                    .context("Failed to set up the positions client")?,
            ),
        };

        let clock: Option<Box<dyn LocalTimeProvider>> = if config.local_time() {
            Some(Box::new(TimezoneClock::new()))
        } else {
            None
        };

        Ok(Self {
            geocoder,
            astronomy,
            clock,
        })
    }

    /// Borrow these collaborators into a workflow configured from `config`.
    pub fn workflow(&self, config: &Config) -> SearchWorkflow<'_> {
        let workflow = SearchWorkflow::new(self.geocoder.as_ref(), self.astronomy.as_ref())
            .with_transformer(config.transformer())
            .with_skymap_url(config.skymap_url());

        match &self.clock {
            Some(clock) => workflow.with_clock(clock.as_ref()),
            None => workflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_offline_search_from_saved_readings() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"data": [
                {"name": "Jupiter", "altitude": 45.0, "azimuth": 180.0, "magnitude": -2.5, "constellation": "Taurus", "nakedEyeObject": true}
            ]}"#,
        )
        .unwrap();

        let config = Config {
            local_time: Some(false),
            fallback_hour: Some(22),
            ..Config::default()
        };
        let collaborators =
            Collaborators::from_config(&config, true, Some(file.path().to_path_buf())).unwrap();
        assert!(collaborators.clock.is_none());

        let now = Utc.with_ymd_and_hms(2024, 10, 17, 21, 0, 0).unwrap();
        let report = collaborators.workflow(&config).run("  London ", now).unwrap();

        assert!(report.city.starts_with("London"));
        assert_eq!(report.local_time, None);
        assert_eq!(report.reference_hour, 22);
        assert_eq!(report.objects.len(), 2);
        assert_eq!(report.objects[0].name, "Jupiter");
        assert_eq!(report.objects[1].name, "Taurus");
        assert!(report.summary.contains("Jupiter"));
        assert!(report.sky_map_url.is_some());
    }
}

//! External collaborators of a sky search.
//!
//! Each concern sits behind a small trait so the search workflow can run
//! against the network, against local data, or against test doubles:
//!
//! - [`Geocoder`]: city name to coordinates
//! - [`AstronomySource`]: coordinates to raw celestial readings
//! - [`LocalTimeProvider`]: coordinates to the local wall-clock text
//!
//! All collaborators report failures through [`ServiceError`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::sky::RawCelestialReading;

pub mod error;
mod http;
pub mod offline;
pub mod open_meteo;
pub mod readings_file;
pub mod timezone;
pub mod visible_planets;

pub use error::ServiceError;
pub use offline::OfflineGeocoder;
pub use open_meteo::OpenMeteoGeocoder;
pub use readings_file::ReadingsFile;
pub use timezone::TimezoneClock;
pub use visible_planets::VisiblePlanetsSource;

/// A resolved location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// Canonical display name, e.g. "Paris, France".
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    /// Build a place, rejecting coordinates outside the valid ranges.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Result<Self, ServiceError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ServiceError::InvalidResponseShape(format!(
                "coordinates out of range: {latitude}, {longitude}"
            )));
        }
        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
        })
    }
}

pub trait Geocoder {
    fn geocode(&self, city: &str) -> Result<Place, ServiceError>;
}

pub trait AstronomySource {
    fn positions(
        &self,
        latitude: f64,
        longitude: f64,
        now: DateTime<Utc>,
    ) -> Result<Vec<RawCelestialReading>, ServiceError>;
}

pub trait LocalTimeProvider {
    /// Local wall-clock time as text, e.g. "9:05 PM".
    fn local_time(&self, latitude: f64, longitude: f64, now: DateTime<Utc>) -> Result<String, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_accepts_valid_coordinates() {
        let place = Place::new("Quito, Ecuador", -0.22985, -78.52495).unwrap();
        assert_eq!(place.name, "Quito, Ecuador");
        assert!(Place::new("Pole", 90.0, 180.0).is_ok());
    }

    #[test]
    fn test_place_rejects_invalid_coordinates() {
        assert!(Place::new("x", 90.5, 0.0).is_err());
        assert!(Place::new("x", 0.0, -180.5).is_err());
        assert!(Place::new("x", f64::NAN, 0.0).is_err());
    }
}

//! Geocoding from the bundled world cities database.
//!
//! Queries are either a bare city name ("Lisbon") or a city followed by a
//! country ("Portland, United States"). Matching is case-insensitive on the
//! full city name. When several cities share a name the first entry of the
//! database wins unless the country narrows it down.

use super::{Geocoder, Place, ServiceError};

#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineGeocoder;

impl OfflineGeocoder {
    pub fn new() -> Self {
        Self
    }
}

impl Geocoder for OfflineGeocoder {
    fn geocode(&self, city: &str) -> Result<Place, ServiceError> {
        let (name, country) = split_query(city);
        if name.is_empty() {
            return Err(ServiceError::EmptyQuery);
        }

        let found = cities::all().iter().find(|entry| {
            entry.city.eq_ignore_ascii_case(name)
                && country.is_none_or(|c| entry.country.to_lowercase().contains(&c.to_lowercase()))
        });

        match found {
            Some(entry) => Place::new(
                format!("{}, {}", entry.city, entry.country),
                entry.latitude,
                entry.longitude,
            ),
            None => Err(ServiceError::NotFound),
        }
    }
}

/// Split "City, Country" into its parts.
fn split_query(query: &str) -> (&str, Option<&str>) {
    match query.split_once(',') {
        Some((city, country)) if !country.trim().is_empty() => (city.trim(), Some(country.trim())),
        Some((city, _)) => (city.trim(), None),
        None => (query.trim(), None),
    }
}

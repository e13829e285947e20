//! Geocoding through the Open-Meteo search endpoint.

use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use super::http::{Endpoint, build_client, decode_json};
use super::{Geocoder, Place, ServiceError};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country: Option<String>,
}

impl SearchResult {
    fn into_place(self) -> Result<Place, ServiceError> {
        let name = match self.country {
            Some(country) if !country.is_empty() => format!("{}, {country}", self.name),
            _ => self.name,
        };
        Place::new(name, self.latitude, self.longitude)
    }
}

/// City search against an Open-Meteo compatible geocoding API.
pub struct OpenMeteoGeocoder {
    client: Client,
    base_url: String,
}

impl OpenMeteoGeocoder {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.to_string(),
        })
    }
}

impl Geocoder for OpenMeteoGeocoder {
    fn geocode(&self, city: &str) -> Result<Place, ServiceError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("name", city), ("count", "1"), ("language", "en"), ("format", "json")])
            .send()?;

        let search: SearchResponse = decode_json(response, Endpoint::Geocode)?;
        first_place(search)
    }
}

fn first_place(search: SearchResponse) -> Result<Place, ServiceError> {
    search
        .results
        .into_iter()
        .next()
        .ok_or(ServiceError::NotFound)?
        .into_place()
}

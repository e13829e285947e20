//! Planet positions from the visibleplanets.dev v3 API.

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use super::http::{Endpoint, build_client, decode_json};
use super::{AstronomySource, ServiceError};
use crate::sky::RawCelestialReading;

/// Envelope of the positions endpoint: `{"meta": {...}, "data": [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct PositionsResponse {
    pub(crate) data: Vec<RawCelestialReading>,
}

/// Client for a visibleplanets.dev compatible positions endpoint.
pub struct VisiblePlanetsSource {
    client: Client,
    base_url: String,
}

impl VisiblePlanetsSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.to_string(),
        })
    }
}

impl AstronomySource for VisiblePlanetsSource {
    fn positions(
        &self,
        latitude: f64,
        longitude: f64,
        now: DateTime<Utc>,
    ) -> Result<Vec<RawCelestialReading>, ServiceError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("time", now.to_rfc3339_opts(SecondsFormat::Secs, true)),
            ])
            .send()?;

        let positions: PositionsResponse = decode_json(response, Endpoint::Positions)?;
        Ok(positions.data)
    }
}

//! Celestial readings replayed from a local JSON file.
//!
//! Accepts either a bare array of readings or the `{"data": [...]}` envelope
//! returned by the positions API, so a saved API response can be fed back
//! unchanged. The coordinates and time of the search are ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use super::{AstronomySource, ServiceError};
use crate::sky::RawCelestialReading;

#[derive(Deserialize)]
#[serde(untagged)]
enum ReadingsDocument {
    Envelope { data: Vec<RawCelestialReading> },
    Bare(Vec<RawCelestialReading>),
}

#[derive(Debug, Clone)]
pub struct ReadingsFile {
    path: PathBuf,
}

impl ReadingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AstronomySource for ReadingsFile {
    fn positions(
        &self,
        _latitude: f64,
        _longitude: f64,
        _now: DateTime<Utc>,
    ) -> Result<Vec<RawCelestialReading>, ServiceError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            ServiceError::UpstreamUnavailable(format!("cannot read {}: {e}", self.path.display()))
        })?;
        parse_readings(&content)
    }
}

pub(crate) fn parse_readings(content: &str) -> Result<Vec<RawCelestialReading>, ServiceError> {
    match serde_json::from_str(content) {
        Ok(ReadingsDocument::Envelope { data }) | Ok(ReadingsDocument::Bare(data)) => Ok(data),
        Err(e) => Err(ServiceError::InvalidResponseShape(format!("readings file: {e}"))),
    }
}

use serde::Serialize;

use crate::sky::{SkyObject, SkyRegime};
use crate::skymap::SkyMapSettings;

/// Everything a single city search produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkyReport {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    /// Local wall-clock text used for best-time estimates, if known.
    pub local_time: Option<String>,
    /// Hour assumed for the estimates (parsed local hour or the fallback).
    pub reference_hour: u32,
    pub sun_altitude: f64,
    pub regime: SkyRegime,
    pub objects: Vec<SkyObject>,
    pub summary: String,
    pub sky_map: SkyMapSettings,
    pub sky_map_url: Option<String>,
}

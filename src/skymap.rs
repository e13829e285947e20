//! Settings for the embeddable interactive sky map.
//!
//! The map itself is a third-party widget. This module only describes how it
//! is framed for a location and renders the link that opens it.

use reqwest::Url;
use serde::Serialize;

/// Display settings passed to the sky-map widget as query parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkyMapSettings {
    pub projection: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Initial view azimuth in degrees; 180 faces south.
    pub azimuth: f64,
    pub live: bool,
    pub star_labels: bool,
    pub planets: bool,
    pub planet_labels: bool,
    pub constellations: bool,
    pub constellation_labels: bool,
    pub ground: bool,
    pub gradient: bool,
    pub cardinal_points: bool,
    pub keyboard: bool,
    pub mouse: bool,
    pub show_date: bool,
    pub show_position: bool,
    pub transparent: bool,
}

impl SkyMapSettings {
    /// Stereographic live view facing south with labels on.
    pub fn for_location(latitude: f64, longitude: f64) -> Self {
        Self {
            projection: "stereo",
            latitude,
            longitude,
            azimuth: 180.0,
            live: true,
            star_labels: true,
            planets: true,
            planet_labels: true,
            constellations: true,
            constellation_labels: true,
            ground: true,
            gradient: true,
            cardinal_points: true,
            keyboard: false,
            mouse: true,
            show_date: false,
            show_position: false,
            transparent: false,
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("projection", self.projection.to_string()),
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("az", self.azimuth.to_string()),
            ("live", self.live.to_string()),
            ("showstarlabels", self.star_labels.to_string()),
            ("showplanets", self.planets.to_string()),
            ("showplanetlabels", self.planet_labels.to_string()),
            ("showconstellations", self.constellations.to_string()),
            ("showconstellationlabels", self.constellation_labels.to_string()),
            ("ground", self.ground.to_string()),
            ("gradient", self.gradient.to_string()),
            ("cardinalpoints", self.cardinal_points.to_string()),
            ("keyboard", self.keyboard.to_string()),
            ("mouse", self.mouse.to_string()),
            ("showdate", self.show_date.to_string()),
            ("showposition", self.show_position.to_string()),
            ("transparent", self.transparent.to_string()),
        ]
    }

    /// Link to the widget at `base_url`, or `None` if the base does not parse.
    pub fn embed_url(&self, base_url: &str) -> Option<String> {
        Url::parse_with_params(base_url, self.params())
            .ok()
            .map(String::from)
    }
}

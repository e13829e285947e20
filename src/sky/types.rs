//! Data carried through the derivation pipeline.

use serde::{Deserialize, Serialize};

/// One body as reported by the positional-astronomy source.
///
/// Only the fields the pipeline reads are modelled; anything else the
/// upstream sends (right ascension, declination, ...) is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCelestialReading {
    pub name: String,
    /// Degrees above the horizon, negative when below it.
    pub altitude: f64,
    /// Degrees clockwise from north.
    pub azimuth: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constellation: Option<String>,
    #[serde(rename = "nakedEyeObject", default)]
    pub naked_eye_object: bool,
}

impl RawCelestialReading {
    /// Above the horizon and flagged visible without optical aid.
    pub fn is_visible(&self) -> bool {
        self.altitude > 0.0 && self.naked_eye_object
    }
}

/// Category badge shown on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Planet,
    Constellation,
    Star,
    Moon,
    Other,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Planet => "Planet",
            ObjectKind::Constellation => "Constellation",
            ObjectKind::Star => "Star",
            ObjectKind::Moon => "Moon",
            ObjectKind::Other => "Other",
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A display-ready entry produced by the transformer.
///
/// Every field is already formatted for presentation. The serialized form
/// uses the field names the web front-end consumes (`type`, `bestTime`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkyObject {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// Whole degrees above the horizon.
    pub altitude: String,
    /// Compass code, empty for constellation entries.
    pub direction: String,
    pub best_time: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<String>,
}

impl SkyObject {
    pub fn is_kind(&self, kind: ObjectKind) -> bool {
        self.kind == kind
    }
}

/// Render an altitude as whole degrees, dropping the fractional part.
///
/// Non-finite input renders as "0" so the function stays total.
pub fn whole_degrees(altitude: f64) -> String {
    if altitude.is_finite() {
        format!("{}", altitude.trunc() as i64)
    } else {
        "0".to_string()
    }
}

/// Render a magnitude with one decimal place.
pub fn format_magnitude(magnitude: f64) -> String {
    format!("{magnitude:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_deserializes_upstream_shape() {
        let json = r#"{
            "name": "Jupiter",
            "constellation": "Pisces",
            "rightAscension": {"hours": 1, "minutes": 2, "seconds": 3},
            "altitude": 45.2,
            "azimuth": 170.1,
            "aboveHorizon": true,
            "magnitude": -2.5,
            "nakedEyeObject": true
        }"#;
        let reading: RawCelestialReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.name, "Jupiter");
        assert_eq!(reading.constellation.as_deref(), Some("Pisces"));
        assert_eq!(reading.magnitude, Some(-2.5));
        assert!(reading.naked_eye_object);
        assert!(reading.is_visible());
    }

    #[test]
    fn test_reading_optional_fields_default() {
        let json = r#"{"name": "Sun", "altitude": -20.0, "azimuth": 270.0}"#;
        let reading: RawCelestialReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.magnitude, None);
        assert_eq!(reading.constellation, None);
        assert!(!reading.naked_eye_object);
        assert!(!reading.is_visible());
    }

    #[test]
    fn test_sky_object_serializes_front_end_names() {
        let object = SkyObject {
            name: "Mars".to_string(),
            kind: ObjectKind::Planet,
            altitude: "12".to_string(),
            direction: "SE".to_string(),
            best_time: "Now".to_string(),
            description: "Red.".to_string(),
            magnitude: None,
        };
        let value = serde_json::to_value(&object).unwrap();
        assert_eq!(value["type"], "Planet");
        assert_eq!(value["bestTime"], "Now");
        assert!(value.get("magnitude").is_none());
    }

    #[test]
    fn test_whole_degrees() {
        assert_eq!(whole_degrees(45.0), "45");
        assert_eq!(whole_degrees(27.5), "27");
        assert_eq!(whole_degrees(0.4), "0");
        assert_eq!(whole_degrees(f64::NAN), "0");
    }

    #[test]
    fn test_format_magnitude() {
        assert_eq!(format_magnitude(-2.5), "-2.5");
        assert_eq!(format_magnitude(0.0), "0.0");
        assert_eq!(format_magnitude(1.26), "1.3");
    }
}

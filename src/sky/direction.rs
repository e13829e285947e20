//! Azimuth to compass-point classification.

use serde::{Deserialize, Serialize};

use crate::constants::COMPASS_SECTOR;

/// One of the eight principal compass points, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassDirection {
    /// All points in clockwise order starting at north.
    pub const ALL: [CompassDirection; 8] = [
        CompassDirection::N,
        CompassDirection::NE,
        CompassDirection::E,
        CompassDirection::SE,
        CompassDirection::S,
        CompassDirection::SW,
        CompassDirection::W,
        CompassDirection::NW,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassDirection::N => "N",
            CompassDirection::NE => "NE",
            CompassDirection::E => "E",
            CompassDirection::SE => "SE",
            CompassDirection::S => "S",
            CompassDirection::SW => "SW",
            CompassDirection::W => "W",
            CompassDirection::NW => "NW",
        }
    }
}

impl std::fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an azimuth in degrees to the nearest compass point.
///
/// Values outside [0, 360) wrap around; non-finite input resolves to north.
pub fn direction_from_azimuth(azimuth: f64) -> CompassDirection {
    let sector = (azimuth / COMPASS_SECTOR).round();
    let index = if sector.is_finite() {
        (sector as i64).rem_euclid(8) as usize
    } else {
        0
    };
    CompassDirection::ALL[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_points() {
        assert_eq!(direction_from_azimuth(0.0), CompassDirection::N);
        assert_eq!(direction_from_azimuth(90.0), CompassDirection::E);
        assert_eq!(direction_from_azimuth(180.0), CompassDirection::S);
        assert_eq!(direction_from_azimuth(270.0), CompassDirection::W);
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(direction_from_azimuth(22.0), CompassDirection::N);
        assert_eq!(direction_from_azimuth(23.0), CompassDirection::NE);
        // Rounding is half away from zero, so 22.5 already belongs to NE
        assert_eq!(direction_from_azimuth(22.5), CompassDirection::NE);
        assert_eq!(direction_from_azimuth(44.0), CompassDirection::NE);
        assert_eq!(direction_from_azimuth(67.0), CompassDirection::NE);
        assert_eq!(direction_from_azimuth(68.0), CompassDirection::E);
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(direction_from_azimuth(359.0), CompassDirection::N);
        assert_eq!(direction_from_azimuth(338.0), CompassDirection::N);
        assert_eq!(direction_from_azimuth(337.0), CompassDirection::NW);
        assert_eq!(direction_from_azimuth(360.0), CompassDirection::N);
        assert_eq!(direction_from_azimuth(450.0), CompassDirection::E);
        assert_eq!(direction_from_azimuth(-90.0), CompassDirection::W);
        assert_eq!(direction_from_azimuth(-10.0), CompassDirection::N);
    }

    #[test]
    fn test_non_finite_input() {
        assert_eq!(direction_from_azimuth(f64::NAN), CompassDirection::N);
        assert_eq!(direction_from_azimuth(f64::INFINITY), CompassDirection::N);
    }

    #[test]
    fn test_display() {
        assert_eq!(CompassDirection::SW.to_string(), "SW");
    }
}

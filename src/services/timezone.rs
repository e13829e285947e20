//! Local wall-clock time from coordinates.
//!
//! The timezone is looked up offline from the coordinates, then the current
//! instant is rendered in that zone as "H:MM AM/PM".

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tzf_rs::DefaultFinder;

use super::{LocalTimeProvider, ServiceError};

pub struct TimezoneClock {
    finder: DefaultFinder,
}

impl Default for TimezoneClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneClock {
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }

    /// IANA timezone covering the coordinates.
    pub fn zone(&self, latitude: f64, longitude: f64) -> Result<Tz, ServiceError> {
        let name = self.finder.get_tz_name(longitude, latitude);
        if name.is_empty() {
            return Err(ServiceError::UpstreamUnavailable(format!(
                "no timezone for {latitude}, {longitude}"
            )));
        }
        name.parse::<Tz>()
            .map_err(|_| ServiceError::UpstreamUnavailable(format!("unknown timezone '{name}'")))
    }
}

impl LocalTimeProvider for TimezoneClock {
    fn local_time(&self, latitude: f64, longitude: f64, now: DateTime<Utc>) -> Result<String, ServiceError> {
        let zone = self.zone(latitude, longitude)?;
        Ok(format_local(now, zone))
    }
}

pub(crate) fn format_local(now: DateTime<Utc>, zone: Tz) -> String {
    now.with_timezone(&zone).format("%-I:%M %p").to_string()
}

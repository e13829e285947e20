//! Raw readings to display-ready sky objects.
//!
//! Each visible reading becomes a planet card; readings that carry a
//! constellation tag are also folded into a per-constellation aggregate which
//! yields one constellation card after all readings have been seen. Output
//! order is insertion order: planets in reading order, then constellations in
//! first-seen order.

use serde::Deserialize;

use crate::constants::DEFAULT_FALLBACK_HOUR;
use crate::sky::describe::{DescriptionTable, describe_constellation};
use crate::sky::direction::direction_from_azimuth;
use crate::sky::local_time::LocalTimeContext;
use crate::sky::types::{ObjectKind, RawCelestialReading, SkyObject, format_magnitude, whole_degrees};
use crate::sky::visibility::best_time_for_hour;

/// How a constellation's position is averaged over its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    /// Running pairwise mean: each new member halves the distance to itself.
    ///
    /// Order-dependent and not a true mean for three or more members. This
    /// is the historical behaviour and stays the default.
    #[default]
    Streaming,
    /// True arithmetic mean over all members.
    Batch,
}

impl AggregationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationMode::Streaming => "streaming",
            AggregationMode::Batch => "batch",
        }
    }
}

/// Running position of one constellation.
#[derive(Debug, Clone, PartialEq)]
struct ConstellationAggregate {
    name: String,
    members: Vec<String>,
    altitude: f64,
    azimuth: f64,
    altitude_sum: f64,
    azimuth_sum: f64,
}

impl ConstellationAggregate {
    fn new(name: &str, reading: &RawCelestialReading) -> Self {
        Self {
            name: name.to_string(),
            members: vec![reading.name.clone()],
            altitude: reading.altitude,
            azimuth: reading.azimuth,
            altitude_sum: reading.altitude,
            azimuth_sum: reading.azimuth,
        }
    }

    fn fold(&mut self, reading: &RawCelestialReading) {
        self.members.push(reading.name.clone());
        self.altitude = (self.altitude + reading.altitude) / 2.0;
        self.azimuth = (self.azimuth + reading.azimuth) / 2.0;
        self.altitude_sum += reading.altitude;
        self.azimuth_sum += reading.azimuth;
    }

    fn position(&self, mode: AggregationMode) -> (f64, f64) {
        match mode {
            AggregationMode::Streaming => (self.altitude, self.azimuth),
            AggregationMode::Batch => {
                let count = self.members.len() as f64;
                (self.altitude_sum / count, self.azimuth_sum / count)
            }
        }
    }
}

/// The derivation pipeline with its injected configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformer {
    descriptions: DescriptionTable,
    aggregation: AggregationMode,
    fallback_hour: u32,
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new(DescriptionTable::default(), AggregationMode::default(), DEFAULT_FALLBACK_HOUR)
    }
}

impl Transformer {
    pub fn new(descriptions: DescriptionTable, aggregation: AggregationMode, fallback_hour: u32) -> Self {
        Self {
            descriptions,
            aggregation,
            fallback_hour: fallback_hour % 24,
        }
    }

    pub fn aggregation(&self) -> AggregationMode {
        self.aggregation
    }

    pub fn descriptions(&self) -> &DescriptionTable {
        &self.descriptions
    }

    /// Local-time context this transformer would use for the given inputs.
    pub fn context(&self, readings: &[RawCelestialReading], local_time_text: Option<&str>) -> LocalTimeContext {
        LocalTimeContext::from_readings(local_time_text, readings, self.fallback_hour)
    }

    /// Turn raw readings into sky objects.
    pub fn transform(&self, readings: &[RawCelestialReading], local_time_text: Option<&str>) -> Vec<SkyObject> {
        let context = self.context(readings, local_time_text);

        let mut objects = Vec::new();
        let mut aggregates: Vec<ConstellationAggregate> = Vec::new();

        for reading in readings.iter().filter(|reading| reading.is_visible()) {
            objects.push(self.planet_entry(reading, &context));

            if let Some(constellation) = reading.constellation.as_deref() {
                match aggregates.iter_mut().find(|agg| agg.name == constellation) {
                    Some(aggregate) => aggregate.fold(reading),
                    None => aggregates.push(ConstellationAggregate::new(constellation, reading)),
                }
            }
        }

        objects.extend(
            aggregates
                .iter()
                .map(|aggregate| self.constellation_entry(aggregate, &context)),
        );

        objects
    }

    fn planet_entry(&self, reading: &RawCelestialReading, context: &LocalTimeContext) -> SkyObject {
        SkyObject {
            name: reading.name.clone(),
            kind: ObjectKind::Planet,
            altitude: whole_degrees(reading.altitude),
            direction: direction_from_azimuth(reading.azimuth).to_string(),
            best_time: best_time_for_hour(
                reading.altitude,
                reading.azimuth,
                &reading.name,
                context.current_hour,
                context.sun_altitude,
            ),
            description: self
                .descriptions
                .describe(&reading.name, reading.constellation.as_deref()),
            magnitude: reading.magnitude.map(format_magnitude),
        }
    }

    fn constellation_entry(&self, aggregate: &ConstellationAggregate, context: &LocalTimeContext) -> SkyObject {
        let (altitude, azimuth) = aggregate.position(self.aggregation);
        SkyObject {
            name: aggregate.name.clone(),
            kind: ObjectKind::Constellation,
            altitude: whole_degrees(altitude),
            direction: String::new(),
            best_time: best_time_for_hour(
                altitude,
                azimuth,
                &aggregate.name,
                context.current_hour,
                context.sun_altitude,
            ),
            description: describe_constellation(&aggregate.name, &aggregate.members),
            magnitude: None,
        }
    }
}

/// Transform readings with the built-in description table and streaming averages.
pub fn transform_readings(readings: &[RawCelestialReading], local_time_text: Option<&str>) -> Vec<SkyObject> {
    Transformer::default().transform(readings, local_time_text)
}

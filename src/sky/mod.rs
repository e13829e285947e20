//! Sky-object derivation pipeline.
//!
//! Pure classification and narration over positions computed upstream. Nothing
//! in this module performs I/O or keeps state between calls, so every function
//! can be called concurrently and repeatedly with identical results.
//!
//! ## Module Structure
//!
//! - [`direction`]: azimuth to 8-point compass
//! - [`local_time`]: 12-hour clock parsing and formatting, sun-altitude context
//! - [`visibility`]: twilight regime and best-viewing-time estimates
//! - [`describe`]: per-object and per-constellation prose
//! - [`transform`]: raw readings to display-ready sky objects
//! - [`summary`]: the highlight sentence

pub mod describe;
pub mod direction;
pub mod local_time;
pub mod summary;
pub mod transform;
pub mod types;
pub mod visibility;

pub use describe::{DescriptionTable, describe_object};
pub use direction::{CompassDirection, direction_from_azimuth};
pub use local_time::LocalTimeContext;
pub use summary::compose_summary;
pub use transform::{AggregationMode, Transformer, transform_readings};
pub use types::{ObjectKind, RawCelestialReading, SkyObject};
pub use visibility::{SkyRegime, estimate_best_time};

//! # Tonight's Sky Library
//!
//! Internal library for the `tonights-sky` binary.
//!
//! This library exists to enable testing of the search internals and to keep
//! CLI dispatch (main.rs) separate from application logic.
//!
//! ## Architecture
//!
//! - **Derivation core**: `sky` turns raw celestial readings into display-ready
//!   sky objects and a highlight sentence. Pure functions, no I/O.
//! - **Collaborators**: `services` holds the geocoding, positions and local-time
//!   seams with their HTTP, offline and file-backed implementations.
//! - **Orchestration**: `search` runs one city search and produces a `SkyReport`.
//! - **Presentation**: `display` renders reports as text cards or JSON, and
//!   `skymap` builds the interactive sky-map link.
//! - **Infrastructure**: `args`, `config`, `constants`, and `logger`.

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod config;
pub mod constants;
pub mod display;
pub mod search;
pub mod services;
pub mod sky;
pub mod skymap;

pub use search::{SearchWorkflow, SkyReport};
pub use services::ServiceError;

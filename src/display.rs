//! Presentation of a sky report.
//!
//! The default output is a block of cards drawn with the logger's box
//! characters: a header for the place, the summary sentence, one card per
//! object, and the sky-map link. `--json` prints the report as a single JSON
//! document instead, with logging switched off so stdout stays parseable.

use anyhow::{Context, Result};

use crate::search::SkyReport;
use crate::sky::{ObjectKind, SkyObject};

/// Format coordinates as "48.8534°N, 2.3488°E".
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    let ns = if latitude >= 0.0 { 'N' } else { 'S' };
    let ew = if longitude >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}°{ns}, {:.4}°{ew}", latitude.abs(), longitude.abs())
}

/// Log the report as text cards.
pub fn log_report(report: &SkyReport) {
    log_block_start!("Observing from {}", report.city);
    log_indented!("Coordinates: {}", format_coordinates(report.lat, report.lon));
    match &report.local_time {
        Some(text) => log_indented!("Local time: {} ({})", text, report.regime),
        None => log_indented!(
            "Local time: unknown, assuming {}:00 ({})",
            report.reference_hour,
            report.regime
        ),
    }

    log_block_start!("\"{}\"", report.summary);

    for object in &report.objects {
        log_object(object);
    }

    if let Some(url) = &report.sky_map_url {
        log_block_start!("Interactive sky map:");
        log_indented!("{}", url);
    }
}

fn log_object(object: &SkyObject) {
    log_block_start!("{} ({})", object.name, object.kind);
    if object.is_kind(ObjectKind::Constellation) {
        log_indented!("Altitude: {}°", object.altitude);
    } else {
        log_indented!("Altitude: {}°  Direction: {}", object.altitude, object.direction);
    }
    log_indented!("Best time: {}", object.best_time);
    if let Some(magnitude) = &object.magnitude {
        log_indented!("Magnitude: {}", magnitude);
    }
    log_indented!("{}", object.description);
}

/// Render the report as pretty-printed JSON.
pub fn report_json(report: &SkyReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize sky report")
}

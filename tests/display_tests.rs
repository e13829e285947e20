//! Text rendering of a sky report, captured through file logging.
//!
//! File logging installs a process-wide channel once, so this binary holds a
//! single test.

use tonights_sky::SkyReport;
use tonights_sky::display::log_report;
use tonights_sky::logger::Log;
use tonights_sky::sky::{ObjectKind, SkyObject, SkyRegime};
use tonights_sky::skymap::SkyMapSettings;

fn sample_report() -> SkyReport {
    SkyReport {
        city: "Paris, France".to_string(),
        lat: 48.8534,
        lon: 2.3488,
        local_time: Some("9:00 PM".to_string()),
        reference_hour: 21,
        sun_altitude: -20.0,
        regime: SkyRegime::Night,
        objects: vec![
            SkyObject {
                name: "Saturn".to_string(),
                kind: ObjectKind::Planet,
                altitude: "30".to_string(),
                direction: "SE".to_string(),
                best_time: "Now".to_string(),
                description: "The ringed planet.".to_string(),
                magnitude: Some("0.6".to_string()),
            },
            SkyObject {
                name: "Aquarius".to_string(),
                kind: ObjectKind::Constellation,
                altitude: "27".to_string(),
                direction: String::new(),
                best_time: "Now".to_string(),
                description: "Contains Saturn.".to_string(),
                magnitude: None,
            },
        ],
        summary: "Tonight's sky offers excellent views of Saturn.".to_string(),
        sky_map: SkyMapSettings::for_location(48.8534, 2.3488),
        sky_map_url: Some("https://example.org/map?latitude=48.8534".to_string()),
    }
}

#[test]
fn test_report_cards_are_rendered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.log");

    let guard = Log::start_file_logging(path.to_string_lossy().into_owned()).unwrap();
    log_report(&sample_report());
    drop(guard);

    let output = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines.contains(&"┣ Observing from Paris, France"));
    assert!(lines.contains(&"┃   Coordinates: 48.8534°N, 2.3488°E"));
    assert!(lines.contains(&"┃   Local time: 9:00 PM (night)"));
    assert!(lines.contains(&"┣ \"Tonight's sky offers excellent views of Saturn.\""));

    assert!(lines.contains(&"┣ Saturn (Planet)"));
    assert!(lines.contains(&"┃   Altitude: 30°  Direction: SE"));
    assert!(lines.contains(&"┃   Magnitude: 0.6"));
    assert!(lines.contains(&"┃   The ringed planet."));

    assert!(lines.contains(&"┣ Aquarius (Constellation)"));
    assert!(lines.contains(&"┃   Altitude: 27°"));
    assert_eq!(
        lines.iter().filter(|l| l.contains("Direction:")).count(),
        1,
        "constellation cards carry no direction"
    );
    assert_eq!(lines.iter().filter(|l| **l == "┃   Best time: Now").count(), 2);

    assert!(lines.contains(&"┣ Interactive sky map:"));
    assert!(lines.contains(&"┃   https://example.org/map?latitude=48.8534"));
}

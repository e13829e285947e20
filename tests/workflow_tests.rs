//! Search workflow tests against mocked collaborators.

use chrono::{DateTime, TimeZone, Utc};
use mockall::mock;
use mockall::predicate::eq;

use tonights_sky::SearchWorkflow;
use tonights_sky::services::{AstronomySource, Geocoder, LocalTimeProvider, Place, ServiceError};
use tonights_sky::sky::{ObjectKind, RawCelestialReading, SkyRegime};

mock! {
    pub CityLookup {}
    impl Geocoder for CityLookup {
        fn geocode(&self, city: &str) -> Result<Place, ServiceError>;
    }
}

mock! {
    pub Positions {}
    impl AstronomySource for Positions {
        fn positions(
            &self,
            latitude: f64,
            longitude: f64,
            now: DateTime<Utc>,
        ) -> Result<Vec<RawCelestialReading>, ServiceError>;
    }
}

mock! {
    pub Clock {}
    impl LocalTimeProvider for Clock {
        fn local_time(&self, latitude: f64, longitude: f64, now: DateTime<Utc>) -> Result<String, ServiceError>;
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 17, 20, 0, 0).unwrap()
}

fn reading(
    name: &str,
    altitude: f64,
    azimuth: f64,
    magnitude: Option<f64>,
    constellation: Option<&str>,
    naked_eye: bool,
) -> RawCelestialReading {
    RawCelestialReading {
        name: name.to_string(),
        altitude,
        azimuth,
        magnitude,
        constellation: constellation.map(str::to_string),
        naked_eye_object: naked_eye,
    }
}

fn evening_readings() -> Vec<RawCelestialReading> {
    vec![
        reading("Sun", -20.0, 270.0, None, None, false),
        reading("Jupiter", 45.0, 170.0, Some(-2.5), Some("Pisces"), true),
        reading("Saturn", 10.0, 190.0, None, Some("Pisces"), true),
    ]
}

fn amsterdam() -> Place {
    Place::new("Amsterdam, Netherlands", 52.37403, 4.88969).unwrap()
}

fn geocoder_for(place: Place) -> MockCityLookup {
    let mut geocoder = MockCityLookup::new();
    geocoder
        .expect_geocode()
        .returning(move |_| Ok(place.clone()));
    geocoder
}

fn positions_returning(readings: Vec<RawCelestialReading>) -> MockPositions {
    let mut positions = MockPositions::new();
    positions
        .expect_positions()
        .returning(move |_, _, _| Ok(readings.clone()));
    positions
}

#[test]
fn test_evening_scenario() {
    let geocoder = geocoder_for(amsterdam());
    let positions = positions_returning(evening_readings());
    let mut clock = MockClock::new();
    clock
        .expect_local_time()
        .with(eq(52.37403), eq(4.88969), eq(now()))
        .times(1)
        .returning(|_, _, _| Ok("9:00 PM".to_string()));

    let report = SearchWorkflow::new(&geocoder, &positions)
        .with_clock(&clock)
        .run("Amsterdam", now())
        .unwrap();

    assert_eq!(report.city, "Amsterdam, Netherlands");
    assert_eq!(report.local_time.as_deref(), Some("9:00 PM"));
    assert_eq!(report.reference_hour, 21);
    assert_eq!(report.regime, SkyRegime::Night);

    let names: Vec<&str> = report.objects.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["Jupiter", "Saturn", "Pisces"]);

    let jupiter = &report.objects[0];
    assert_eq!(jupiter.kind, ObjectKind::Planet);
    assert_eq!(jupiter.altitude, "45");
    assert_eq!(jupiter.direction, "S");
    assert_eq!(jupiter.magnitude.as_deref(), Some("-2.5"));

    let saturn = &report.objects[1];
    assert_eq!(saturn.direction, "S");
    assert_eq!(saturn.magnitude, None);

    let pisces = &report.objects[2];
    assert_eq!(pisces.kind, ObjectKind::Constellation);
    assert_eq!(pisces.altitude, "27");
    assert_eq!(pisces.direction, "");
    assert!(pisces.description.contains("Jupiter, Saturn"));

    assert!(report.summary.contains("Jupiter"));
    assert!(report.summary.contains("Saturn"));
    assert!(report.summary.contains("the Pisces constellation"));
    assert!(report.sky_map_url.as_deref().unwrap().contains("latitude=52.37403"));
}

#[test]
fn test_query_is_trimmed_before_geocoding() {
    let mut geocoder = MockCityLookup::new();
    geocoder
        .expect_geocode()
        .with(eq("Amsterdam"))
        .times(1)
        .returning(|_| Ok(amsterdam()));
    let positions = positions_returning(Vec::new());

    let report = SearchWorkflow::new(&geocoder, &positions)
        .run("  Amsterdam \t", now())
        .unwrap();
    assert!(report.objects.is_empty());
    assert_eq!(report.summary, tonights_sky::sky::summary::EMPTY_SKY);
}

#[test]
fn test_blank_query_never_reaches_collaborators() {
    let mut geocoder = MockCityLookup::new();
    geocoder.expect_geocode().times(0);
    let mut positions = MockPositions::new();
    positions.expect_positions().times(0);

    for query in ["", "   ", "\t\n"] {
        let result = SearchWorkflow::new(&geocoder, &positions).run(query, now());
        assert!(matches!(result, Err(ServiceError::EmptyQuery)));
    }
}

#[test]
fn test_geocoder_failure_stops_search() {
    let mut geocoder = MockCityLookup::new();
    geocoder
        .expect_geocode()
        .returning(|_| Err(ServiceError::NotFound));
    let mut positions = MockPositions::new();
    positions.expect_positions().times(0);

    let error = SearchWorkflow::new(&geocoder, &positions)
        .run("Atlantis", now())
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "City not found. Please check the spelling and try again."
    );
}

#[test]
fn test_positions_failure_is_reported() {
    let geocoder = geocoder_for(amsterdam());
    let mut positions = MockPositions::new();
    positions
        .expect_positions()
        .returning(|_, _, _| Err(ServiceError::RateLimited));

    let error = SearchWorkflow::new(&geocoder, &positions)
        .run("Amsterdam", now())
        .unwrap_err();
    assert!(matches!(error, ServiceError::RateLimited));
}

#[test]
fn test_clock_failure_falls_back_to_configured_hour() {
    let geocoder = geocoder_for(amsterdam());
    let positions = positions_returning(evening_readings());
    let mut clock = MockClock::new();
    clock
        .expect_local_time()
        .returning(|_, _, _| Err(ServiceError::UpstreamUnavailable("no zone".into())));

    let report = SearchWorkflow::new(&geocoder, &positions)
        .with_clock(&clock)
        .run("Amsterdam", now())
        .unwrap();

    assert_eq!(report.local_time, None);
    assert_eq!(report.reference_hour, 12);
    assert_eq!(report.objects.len(), 3);
}

#[test]
fn test_time_override_skips_clock() {
    let geocoder = geocoder_for(amsterdam());
    let positions = positions_returning(evening_readings());
    let mut clock = MockClock::new();
    clock.expect_local_time().times(0);

    let report = SearchWorkflow::new(&geocoder, &positions)
        .with_clock(&clock)
        .with_time_override(Some("11:15 pm".to_string()))
        .run("Amsterdam", now())
        .unwrap();

    assert_eq!(report.local_time.as_deref(), Some("11:15 pm"));
    assert_eq!(report.reference_hour, 23);
}

#[test]
fn test_daytime_regime_from_sun_reading() {
    let geocoder = geocoder_for(amsterdam());
    let positions = positions_returning(vec![
        reading("Sun", 35.0, 200.0, Some(-26.7), Some("Virgo"), true),
        reading("Venus", 20.0, 220.0, Some(-4.0), Some("Virgo"), true),
    ]);

    let report = SearchWorkflow::new(&geocoder, &positions)
        .with_time_override(Some("1:00 PM".to_string()))
        .run("Amsterdam", now())
        .unwrap();

    assert_eq!(report.regime, SkyRegime::Daytime);
    assert_eq!(report.objects[0].name, "Sun");
    assert_eq!(report.objects[0].kind, ObjectKind::Planet);
    assert_eq!(report.objects[0].best_time, "Now (near noon)");
    assert!(report.objects[1].best_time.starts_with("After sunset"));
}

use super::validation::validate_config;
use super::*;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.geocoder(), GeocoderKind::OpenMeteo);
    assert_eq!(config.geocode_url(), DEFAULT_GEOCODE_URL);
    assert_eq!(config.astronomy_url(), DEFAULT_ASTRONOMY_URL);
    assert_eq!(config.skymap_url(), DEFAULT_SKYMAP_URL);
    assert_eq!(config.request_timeout(), Duration::from_secs(DEFAULT_REQUEST_TIMEOUT));
    assert!(config.local_time());
    assert_eq!(config.fallback_hour(), 12);
    assert_eq!(config.constellation_average(), AggregationMode::Streaming);
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_load_full_file() {
    let (_dir, path) = write_config(
        r#"
geocoder = "offline"
astronomy_url = "http://localhost:8787/v3"
request_timeout = 30
local_time = false
fallback_hour = 21
constellation_average = "batch"

[descriptions]
Moon = "Our nearest neighbour."
Mars = "Rusty."
"#,
    );

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.geocoder(), GeocoderKind::Offline);
    assert_eq!(config.astronomy_url(), "http://localhost:8787/v3");
    assert_eq!(config.geocode_url(), DEFAULT_GEOCODE_URL);
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert!(!config.local_time());
    assert_eq!(config.fallback_hour(), 21);
    assert_eq!(config.constellation_average(), AggregationMode::Batch);
    assert_eq!(config.descriptions.len(), 2);
}

#[test]
fn test_transformer_carries_configuration() {
    let (_dir, path) = write_config(
        r#"
constellation_average = "batch"
fallback_hour = 20

[descriptions]
Mars = "Rusty."
"#,
    );
    let transformer = load_from_path(&path).unwrap().transformer();
    assert_eq!(transformer.aggregation(), AggregationMode::Batch);
    assert_eq!(transformer.descriptions().get("Mars"), Some("Rusty."));
    assert!(transformer.descriptions().get("Jupiter").is_some());
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = write_config("");
    assert_eq!(load_from_path(&path).unwrap(), Config::default());
}

#[test]
fn test_unknown_field_rejected() {
    let (_dir, path) = write_config("night_temp = 3300\n");
    assert!(load_from_path(&path).is_err());
}

#[test]
fn test_unknown_geocoder_rejected() {
    let (_dir, path) = write_config("geocoder = \"carrier-pigeon\"\n");
    assert!(load_from_path(&path).is_err());
}

#[test]
fn test_timeout_range() {
    for (timeout, ok) in [(0, false), (1, true), (120, true), (121, false)] {
        let config = Config {
            request_timeout: Some(timeout),
            ..Config::default()
        };
        assert_eq!(validate_config(&config).is_ok(), ok, "timeout {timeout}");
    }
}

#[test]
fn test_fallback_hour_range() {
    let valid = Config {
        fallback_hour: Some(23),
        ..Config::default()
    };
    assert!(validate_config(&valid).is_ok());

    let invalid = Config {
        fallback_hour: Some(24),
        ..Config::default()
    };
    let error = validate_config(&invalid).unwrap_err().to_string();
    assert!(error.contains("fallback_hour"));
}

#[test]
fn test_url_validation() {
    let bad_scheme = Config {
        astronomy_url: Some("ftp://example.com/v3".to_string()),
        ..Config::default()
    };
    let error = validate_config(&bad_scheme).unwrap_err().to_string();
    assert!(error.contains("astronomy_url"));

    let not_a_url = Config {
        geocode_url: Some("not a url".to_string()),
        ..Config::default()
    };
    assert!(validate_config(&not_a_url).is_err());
}

#[test]
fn test_empty_description_rejected() {
    let mut descriptions = BTreeMap::new();
    descriptions.insert("Moon".to_string(), "   ".to_string());
    let config = Config {
        descriptions,
        ..Config::default()
    };
    assert!(validate_config(&config).is_err());
}

#[test]
#[serial]
fn test_load_without_file_uses_defaults() {
    let temp_dir = tempdir().unwrap();

    // Save and restore XDG_CONFIG_HOME
    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    let result = load();

    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    assert_eq!(result.unwrap(), Config::default());
    assert!(!temp_dir.path().join(APP_NAME).exists());
}

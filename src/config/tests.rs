use super::*;
use std::io::Write;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("luach.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(Some(dir.path().to_str().unwrap())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
latitude = 31.778
longitude = 35.235
elevation = 650.0
timezone = "Asia/Jerusalem"
candle_minutes = 40
tefillin_degrees = 11.5
"#,
    );
    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config.latitude, Some(31.778));
    assert_eq!(config.longitude, Some(35.235));
    assert_eq!(config.elevation, Some(650.0));
    assert_eq!(config.timezone.as_deref(), Some("Asia/Jerusalem"));
    assert_eq!(config.candle_minutes, Some(40));
    assert_eq!(config.tefillin_degrees, Some(11.5));
}

#[test]
fn test_partial_config_leaves_rest_unset() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "latitude = 40.6782\nlongitude = -73.9442\n");
    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config.latitude, Some(40.6782));
    assert_eq!(config.longitude, Some(-73.9442));
    assert_eq!(config.timezone, None);
    assert_eq!(config.candle_minutes, None);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "latitude = \"north\"\n");
    assert!(Config::load_from_path(&path).is_err());
}

#[test]
fn test_latitude_out_of_range() {
    let config = Config {
        latitude: Some(99.0),
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("latitude"));
}

#[test]
fn test_longitude_out_of_range() {
    let config = Config {
        longitude: Some(-200.0),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_negative_elevation_rejected() {
    let config = Config {
        elevation: Some(-5.0),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_candle_minutes_capped() {
    let config = Config {
        candle_minutes: Some(500),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_bad_timezone_name_rejected() {
    let config = Config {
        timezone: Some("Not/A_Zone".to_string()),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_tefillin_degrees_range() {
    let config = Config {
        tefillin_degrees: Some(25.0),
        ..Config::default()
    };
    assert!(config.validate().is_err());
    let config = Config {
        tefillin_degrees: Some(10.2),
        ..Config::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_custom_dir_path_shape() {
    let path = get_config_path(Some("/tmp/somewhere")).unwrap();
    assert_eq!(path, PathBuf::from("/tmp/somewhere/luach.toml"));
}

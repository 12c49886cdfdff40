//! Configuration loading and validation.

use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

use weekgrid::{Config, StartOfWeek};

#[test]
fn config_loads_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weekgrid.toml");
    let mut file = File::create(&path).unwrap();
    write!(
        file,
        r#"
        [week]
        starts_on = "sunday"

        [grid]
        day_start_hour = 7
        day_end_hour = 19
        slot_height_px = 52.0

        [palette]
        default_token = "stone"

        [palette.tokens]
        exotic = "teal"
        "#
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.week.starts_on, StartOfWeek::Sunday);
    assert_eq!(config.grid.day_start_hour, 7);
    assert_eq!(config.palette.default_token, "stone");
    assert_eq!(config.palette.tokens["exotic"], "teal");

    // Unset sections keep their defaults.
    assert_eq!(config.timing.min_duration_minutes, 15);
    assert_eq!(config.timing.default_duration_minutes, 30);
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::from_file(dir.path().join("nope.toml"));
    assert!(result.is_err());
}

#[test]
fn invalid_timing_is_rejected() {
    let result = Config::from_str(
        r#"
        [timing]
        min_duration_minutes = 20
        default_duration_minutes = 10
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let config = Config::default();
    let serialized = toml::to_string(&config).unwrap();
    let back = Config::from_str(&serialized).unwrap();
    assert_eq!(back.grid.day_start_hour, config.grid.day_start_hour);
    assert_eq!(back.week.starts_on, config.week.starts_on);
}

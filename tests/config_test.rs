//! Config file loading from disk.

mod common;

use color_diff::{Color, Lab, Rgb};
use colormatch::error::ConfigError;
use colormatch::models::{AppConfig, Mode};
use common::{fixtures, write_temp_file};
use pretty_assertions::assert_eq;

#[test]
fn test_load_full_config() {
    let (_dir, path) = write_temp_file("colormatch.yaml", fixtures::FULL_CONFIG);

    let config = AppConfig::load(Some(path)).unwrap();

    assert_eq!(config.default_palette, "mono");
    assert_eq!(config.mode, Mode::Closest);
    assert_eq!(config.background_rgb().unwrap(), Some(Rgb::WHITE));
    assert_eq!(
        config.palette(None).unwrap(),
        vec![Color::Rgb(Rgb::BLACK), Color::Rgb(Rgb::WHITE)]
    );
    assert_eq!(
        config.palette(Some("brand")).unwrap(),
        vec![
            Color::Rgb(Rgb::from_u8(255, 215, 0)),
            Color::Rgb(Rgb::from_u8(0, 0, 128)),
            Color::Lab(Lab::new(50.0, 0.0, 0.0)),
        ]
    );
    // mono, brand + the two built-ins
    assert_eq!(config.palettes.len(), 4);
}

#[test]
fn test_load_partial_config_keeps_defaults() {
    let (_dir, path) = write_temp_file("furthest.yaml", fixtures::FURTHEST_CONFIG);

    let config = AppConfig::load_from_file(&path).unwrap();

    assert_eq!(config.mode, Mode::Furthest);
    assert_eq!(config.default_palette, "css-basic");
    assert!(config.background.is_none());
    assert_eq!(config.palette(None).unwrap().len(), 16);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = AppConfig::load(Some(path.clone())).unwrap_err();

    match err {
        ConfigError::Read { path: p, .. } => assert_eq!(p, path),
        other => panic!("Expected Read error, got {other:?}"),
    }
}

#[test]
fn test_load_invalid_color_is_parse_error() {
    let (_dir, path) = write_temp_file("broken.yaml", fixtures::BROKEN_CONFIG);

    let err = AppConfig::load_from_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
    assert!(err.to_string().starts_with("Failed to parse config"));
}

#[test]
fn test_load_malformed_yaml() {
    let (_dir, path) = write_temp_file("bad.yaml", "palettes: [unclosed");

    let err = AppConfig::load_from_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
}

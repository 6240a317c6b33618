use std::fs;

use reflink_core::Variant;
use reflink_engine::{AppConfig, ConfigError, LogDestination};
use tempfile::TempDir;

#[test]
fn missing_default_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = AppConfig::load_or_default(&temp.path().join("reflink.ron")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn missing_explicit_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.ron");
    let err = AppConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn config_file_is_parsed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("reflink.ron");
    fs::write(&path, "(variant: Strict, log: Off, clipboard: Stdout)").unwrap();

    let config = AppConfig::load(Some(&path)).unwrap();
    assert_eq!(config.variant, Variant::Strict);
    assert_eq!(config.log, LogDestination::Off);

    let same = AppConfig::load_or_default(&path).unwrap();
    assert_eq!(config, same);
}

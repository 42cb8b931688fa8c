//! Tests for TOML configuration loading.

use std::io::Write;
use std::path::PathBuf;
use tictac::{AppConfig, TileScale};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = AppConfig::load(dir.path().join("absent.toml")).expect("Defaults");

    assert_eq!(config, AppConfig::default());
    assert_eq!(*config.scale(), TileScale::Medium);
    assert!(*config.mouse());
    assert_eq!(config.log_file(), &PathBuf::from("tictac.log"));
}

#[test]
fn test_partial_file_fills_defaults() {
    let file = write_config("scale = \"large\"\n");
    let config = AppConfig::load(file.path()).expect("Valid config");

    assert_eq!(*config.scale(), TileScale::Large);
    assert!(*config.mouse());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_full_file() {
    let file = write_config(
        r#"
scale = "small"
mouse = false
log_file = "/tmp/tictac-test.log"
log_filter = "debug,tictac_core=trace"
"#,
    );
    let config = AppConfig::from_file(file.path()).expect("Valid config");

    assert_eq!(*config.scale(), TileScale::Small);
    assert!(!*config.mouse());
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/tictac-test.log"));
    assert_eq!(config.log_filter(), "debug,tictac_core=trace");
}

#[test]
fn test_invalid_values_are_errors() {
    let file = write_config("scale = \"enormous\"\n");
    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));

    let file = write_config("colour = \"red\"\n");
    assert!(AppConfig::load(file.path()).is_err());
}

#[test]
fn test_overrides_win_over_file() {
    let file = write_config("scale = \"small\"\nmouse = true\n");
    let config = AppConfig::load(file.path())
        .expect("Valid config")
        .with_overrides(Some(TileScale::Large), true);

    assert_eq!(*config.scale(), TileScale::Large);
    assert!(!*config.mouse());

    let unchanged = AppConfig::default().with_overrides(None, false);
    assert_eq!(unchanged, AppConfig::default());
}

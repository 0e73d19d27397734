use std::fs;
use std::path::PathBuf;

use chisel::cli::Args;
use chisel::config::{get_config, Config};
use chisel::error::Error;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.site_dir, PathBuf::from("site"));
    assert_eq!(config.content_dir, PathBuf::from("content"));
    assert_eq!(config.output_dir, PathBuf::from("build"));
    assert_eq!(config.skip_prefix, "_");
    assert_eq!(config.load_prefix, "%");
    assert_eq!(config.copy_prefix, "b%");
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("chisel.json");
    fs::write(&config_path, r#"{"output_dir": "public", "skip_prefix": "."}"#).unwrap();

    let args = Args { config: Some(config_path), ..Args::default() };
    let config = get_config(&args).unwrap();

    assert_eq!(config.output_dir, PathBuf::from("public"));
    assert_eq!(config.skip_prefix, ".");
    // Untouched fields keep their defaults
    assert_eq!(config.site_dir, PathBuf::from("site"));
    assert_eq!(config.copy_prefix, "b%");
}

#[test]
fn test_cli_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("chisel.json");
    fs::write(&config_path, r#"{"output_dir": "public"}"#).unwrap();

    let args = Args {
        config: Some(config_path),
        output_dir: Some(PathBuf::from("dist")),
        ..Args::default()
    };
    let config = get_config(&args).unwrap();

    assert_eq!(config.output_dir, PathBuf::from("dist"));
}

#[test]
fn test_explicit_config_file_must_exist() {
    let args = Args {
        config: Some(PathBuf::from("/definitely/not/here/chisel.json")),
        ..Args::default()
    };

    assert!(matches!(get_config(&args).unwrap_err(), Error::ConfigError(_)));
}

#[test]
fn test_invalid_config_format() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("chisel.json");
    fs::write(&config_path, "{broken").unwrap();

    let args = Args { config: Some(config_path), ..Args::default() };

    assert!(matches!(get_config(&args).unwrap_err(), Error::ConfigError(_)));
}

#[test]
fn test_unknown_config_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("chisel.json");
    fs::write(&config_path, r#"{"ouput_dir": "typo"}"#).unwrap();

    let args = Args { config: Some(config_path), ..Args::default() };

    assert!(matches!(get_config(&args).unwrap_err(), Error::ConfigError(_)));
}

#[test]
fn test_empty_marker_is_rejected() {
    let args = Args { skip_prefix: Some(String::new()), ..Args::default() };

    assert!(matches!(get_config(&args).unwrap_err(), Error::ConfigError(_)));
}

#[test]
fn test_colliding_markers_are_rejected() {
    let args = Args {
        load_prefix: Some("@".to_string()),
        copy_prefix: Some("@".to_string()),
        ..Args::default()
    };

    assert!(matches!(get_config(&args).unwrap_err(), Error::ConfigError(_)));
}

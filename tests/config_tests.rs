//! Configuration loading tests

use fractal_validation::{LoggingConfig, ValidatorConfig};
use tempfile::TempDir;

#[test]
fn test_load_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("validator.toml");
    std::fs::write(
        &path,
        "[logging]\nfilter = \"fractal_validation=debug\"\njson_format = false\n",
    )
    .unwrap();

    let config = ValidatorConfig::from_file(&path).unwrap();
    assert_eq!(
        config.logging.filter.as_deref(),
        Some("fractal_validation=debug")
    );
}

#[test]
fn test_json_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("validator.json");

    let config = ValidatorConfig {
        logging: LoggingConfig {
            filter: Some("warn".to_string()),
            json_format: true,
        },
    };
    config.to_json_file(&path).unwrap();

    let loaded = ValidatorConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ValidatorConfig::from_file(&temp_dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_malformed_toml_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    std::fs::write(&path, "[logging\nfilter = 3").unwrap();
    assert!(ValidatorConfig::from_file(&path).is_err());
}

use std::path::PathBuf;

use eventist::config::Config;
use eventist::icons::IconTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.events_file, PathBuf::from("events.json"));
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.featured_width, 40);
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert_eq!(config.display.date_format, "%b %-d");
    assert!(config.display.show_tags);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Featured panel width outside its bounds should fail
    config.ui.featured_width = 10;
    assert!(config.validate().is_err());
    config.ui.featured_width = 200;
    assert!(config.validate().is_err());

    // Reset and test an empty events file path
    config.ui.featured_width = 40;
    config.ui.events_file = PathBuf::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("events_file = \"events.json\""));
    assert!(toml_str.contains("featured_width = 40"));
    assert!(toml_str.contains("show_tags = true"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
featured_width = 30

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();
    assert_eq!(config.ui.featured_width, 30);
    assert!(config.logging.enabled);
    // Untouched sections keep their defaults
    assert_eq!(config.ui.events_file, PathBuf::from("events.json"));
    assert!(config.display.show_tags);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[ui]
events_file = "feed/community.json"
mouse_enabled = false

[display]
date_format = "%d %b"
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.ui.events_file, PathBuf::from("feed/community.json"));
    assert!(!config.ui.mouse_enabled);
    assert_eq!(config.display.date_format, "%d %b");
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[ui]
featured_width = 5
"#,
    )
    .unwrap();

    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_generate_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Eventist Configuration File"));

    // The generated file round-trips through the loader
    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.ui.featured_width, 40);
}

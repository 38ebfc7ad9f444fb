//! Integration tests for Settings config loading
//!
//! Note: these tests run against temp directories only, so they exercise
//! the local-config layer on top of compiled defaults.

use std::fs;

use tempfile::TempDir;

use aggtree::config::{RenderKind, Settings};

#[test]
fn given_no_config_files_when_loading_then_returns_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();

    // Act
    let settings = Settings::load(Some(temp.path())).expect("load settings");

    // Assert
    assert_eq!(settings.render, RenderKind::Plain);
    assert!(!settings.human_sizes);
}

#[test]
fn given_local_config_when_loading_then_overrides_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let local_config = r#"
render = "fancy"
human_sizes = true
"#;
    fs::write(temp.path().join(".aggtree.toml"), local_config).unwrap();

    // Act
    let settings = Settings::load(Some(temp.path())).expect("load settings");

    // Assert
    assert_eq!(settings.render, RenderKind::Fancy);
    assert!(settings.human_sizes);
}

#[test]
fn given_partial_local_config_when_loading_then_keeps_other_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".aggtree.toml"), "human_sizes = true\n").unwrap();

    // Act
    let settings = Settings::load(Some(temp.path())).expect("load settings");

    // Assert
    assert_eq!(settings.render, RenderKind::Plain);
    assert!(settings.human_sizes);
}

#[test]
fn given_invalid_local_config_when_loading_then_errors() {
    // Arrange
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".aggtree.toml"), "render = [not toml").unwrap();

    // Act
    let result = Settings::load(Some(temp.path()));

    // Assert
    assert!(result.is_err());
}

#[test]
fn given_settings_when_round_tripping_toml_then_fields_survive() {
    let settings = Settings {
        render: RenderKind::Fancy,
        human_sizes: true,
    };

    let serialized = toml::to_string(&settings).unwrap();
    let parsed: Settings = toml::from_str(&serialized).unwrap();

    assert_eq!(parsed, settings);
}

//! Integration tests for the huddle-config crate.

use std::fs;
use tempfile::TempDir;
use huddle_config::{Config, ConfigError, CustomizerConfig, LogConfig};
use huddle_protocol::{CustomRole, ThemeKey, View};

#[tokio::test]
async fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("huddle.json5");

    fs::write(
        &config_path,
        r##"
        {
            // Configuration for huddle
            theme: "lagoon",
            view: "board",
            user_name: "Dana",
            customizer: {
                primary: "#0EA5E9",
            },
            log: { level: "debug", file: "/tmp/huddle.log", },
        }
        "##,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.theme, ThemeKey::Lagoon);
    assert_eq!(config.view, View::Board);
    assert_eq!(config.user_name, "Dana");
    assert_eq!(config.customizer.primary, "#0EA5E9");
    // Unset customizer colors keep their defaults
    assert_eq!(config.customizer.background, "#ffffff");
    assert_eq!(config.log.level, "debug");
    assert!(config.log.is_enabled());
}

#[tokio::test]
async fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let original = Config {
        theme: ThemeKey::Barbra,
        view: View::Board,
        user_name: "Robin".to_string(),
        customizer: CustomizerConfig {
            primary: "#112233".to_string(),
            ..CustomizerConfig::default()
        },
        log: LogConfig::to_file("/tmp/huddle.log").with_level("warn"),
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);
    assert_eq!(loaded.customizer.to_customizer().get(CustomRole::Primary), "#112233");
}

#[tokio::test]
async fn config_load_nonexistent_returns_error() {
    let result = Config::load_from("/nonexistent/path/config.json");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn save_theme_creates_missing_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    Config::save_theme(ThemeKey::Indigo, &config_path).unwrap();

    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(loaded.theme, ThemeKey::Indigo);
    assert_eq!(loaded.user_name, Config::default().user_name);
}

#[test]
fn save_theme_keeps_other_settings() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("huddle.json5");
    fs::write(&config_path, r#"{ user_name: "Sam", view: "board" }"#).unwrap();

    Config::save_theme(ThemeKey::Jade, &config_path).unwrap();

    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(loaded.theme, ThemeKey::Jade);
    assert_eq!(loaded.user_name, "Sam");
    assert_eq!(loaded.view, View::Board);
}

#[test]
fn load_rejects_bad_customizer_color() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("huddle.json");
    fs::write(&config_path, r#"{ "customizer": { "primary": "gold" } }"#).unwrap();

    let result = Config::load_from(&config_path);
    assert!(matches!(result, Err(ConfigError::InvalidColor { .. })));
}

#[test]
fn load_rejects_unknown_theme() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("huddle.json");
    fs::write(&config_path, r#"{ "theme": "neon" }"#).unwrap();

    assert!(Config::load_from(&config_path).is_err());
}

#[test]
fn config_validation() {
    let valid = Config {
        theme: ThemeKey::Sunflower,
        log: LogConfig::default().with_level("TRACE"),
        ..Default::default()
    };
    assert!(valid.validate().is_ok());

    let blank_name = Config {
        user_name: " ".to_string(),
        ..Default::default()
    };
    assert!(matches!(blank_name.validate(), Err(ConfigError::EmptyUserName)));
}

#[test]
fn log_file_not_serialized_when_none() {
    let config = Config::default();
    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("\"file\""));
    assert!(json.contains("\"theme\":\"sunflower\""));
}

//! Appearance file tests for the loader.

use ratatui::style::Color;
use serial_test::serial;
use std::path::Path;
use tempfile::TempDir;

use super::{ALL_ALERT_VARS, env_lock};
use crate::loader::builder::AppearanceLoader;
use crate::loader::error::ConfigError;
use crate::types::{BlurStyle, ColorTheme};

fn write_file(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("appearance.json");
    std::fs::write(&path, contents).unwrap();
    path
}

fn cleared() -> Vec<(&'static str, Option<&'static str>)> {
    ALL_ALERT_VARS.iter().map(|name| (*name, None)).collect()
}

#[test]
#[serial]
fn test_missing_file_uses_defaults() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();

    temp_env::with_vars(cleared(), || {
        let loader = AppearanceLoader::new()
            .with_config_path(temp_dir.path().join("absent.json"))
            .from_file()
            .unwrap();
        let appearance = loader.build().unwrap();
        assert!(appearance.use_blur_background);
        assert_eq!(appearance.background_color, Color::Black);
        assert_eq!(appearance.background_alpha, 0.4);
    });
}

#[test]
#[serial]
fn test_file_values_loaded() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        r#"{
            "theme": "high_contrast",
            "use_blur_background": false,
            "blur_style": "light",
            "background_color": "darkgray",
            "shake": { "duration_ms": 300 }
        }"#,
    );

    temp_env::with_vars(cleared(), || {
        let appearance = AppearanceLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(appearance.theme, ColorTheme::HighContrast);
        assert!(!appearance.use_blur_background);
        assert_eq!(appearance.blur_style, BlurStyle::Light);
        assert_eq!(appearance.background_color, Color::DarkGray);
        assert_eq!(appearance.shake.duration_ms, 300);
    });
}

#[test]
#[serial]
fn test_env_overrides_file_regardless_of_order() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), r#"{ "theme": "light" }"#);

    let mut vars = cleared();
    vars.push(("ALERT_THEME", Some("dark")));
    temp_env::with_vars(vars, || {
        let appearance = AppearanceLoader::new()
            .from_env()
            .unwrap()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(appearance.theme, ColorTheme::Dark);
    });
}

#[test]
#[serial]
fn test_config_path_from_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), r#"{ "tap_background_dismiss": false }"#);
    let path_str = path.to_string_lossy().to_string();

    let mut vars: Vec<(&str, Option<&str>)> = cleared();
    vars.push(("ALERT_CONFIG_PATH", Some(path_str.as_str())));
    temp_env::with_vars(vars, || {
        let loader = AppearanceLoader::new().from_file().unwrap();
        assert_eq!(loader.config_path(), Some(&path));
        assert!(!loader.build().unwrap().tap_background_dismiss);
    });
}

#[test]
#[serial]
fn test_malformed_file_is_parse_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "{ not json");

    temp_env::with_vars(cleared(), || {
        let err = AppearanceLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ConfigFileParse { .. }));
        assert!(err.to_string().contains("appearance.json"));
    });
}

#[test]
#[serial]
fn test_excessive_shake_amplitude_rejected() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), r#"{ "shake": { "amplitude": 200 } }"#);

    temp_env::with_vars(cleared(), || {
        let err = AppearanceLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("shake.amplitude"));
    });
}

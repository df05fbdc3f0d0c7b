//! Environment variable parsing for appearance configuration.
//!
//! Responsibilities:
//! - Read and parse `ALERT_*` environment variables.
//! - Apply environment variable values to an `AppearanceLoader` instance.
//!
//! Does NOT handle:
//! - Loading from the appearance file (see file.rs).
//! - Resolving colors or building the final `Appearance` (see builder.rs).
//!
//! Invariants:
//! - Environment variables take precedence over file settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Invalid values return `ConfigError::InvalidValue` naming the variable.

use super::builder::AppearanceLoader;
use super::error::ConfigError;
use crate::types::{BlurStyle, ColorTheme};

pub const ENV_THEME: &str = "ALERT_THEME";
pub const ENV_TAP_DISMISS: &str = "ALERT_TAP_DISMISS";
pub const ENV_USE_BLUR: &str = "ALERT_USE_BLUR";
pub const ENV_BLUR_STYLE: &str = "ALERT_BLUR_STYLE";
pub const ENV_BACKGROUND_COLOR: &str = "ALERT_BACKGROUND_COLOR";
pub const ENV_BACKGROUND_ALPHA: &str = "ALERT_BACKGROUND_ALPHA";
pub const ENV_PROGRESS_COLOR: &str = "ALERT_PROGRESS_COLOR";
pub const ENV_CONFIG_PATH: &str = "ALERT_CONFIG_PATH";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(var, format!("expected a boolean, got '{value}'"))),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut AppearanceLoader) -> Result<(), ConfigError> {
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        let theme: ColorTheme = theme
            .parse()
            .map_err(|message: String| ConfigError::invalid(ENV_THEME, message))?;
        loader.set_theme(Some(theme));
    }
    if let Some(value) = env_var_or_none(ENV_TAP_DISMISS) {
        loader.set_tap_background_dismiss(Some(parse_bool(ENV_TAP_DISMISS, &value)?));
    }
    if let Some(value) = env_var_or_none(ENV_USE_BLUR) {
        loader.set_use_blur_background(Some(parse_bool(ENV_USE_BLUR, &value)?));
    }
    if let Some(value) = env_var_or_none(ENV_BLUR_STYLE) {
        let style: BlurStyle = value
            .parse()
            .map_err(|message: String| ConfigError::invalid(ENV_BLUR_STYLE, message))?;
        loader.set_blur_style(Some(style));
    }
    if let Some(color) = env_var_or_none(ENV_BACKGROUND_COLOR) {
        loader.set_background_color(Some(color));
    }
    if let Some(value) = env_var_or_none(ENV_BACKGROUND_ALPHA) {
        let alpha: f32 = value.parse().map_err(|_| {
            ConfigError::invalid(ENV_BACKGROUND_ALPHA, format!("expected a number, got '{value}'"))
        })?;
        loader.set_background_alpha(Some(alpha));
    }
    if let Some(color) = env_var_or_none(ENV_PROGRESS_COLOR) {
        loader.set_progress_bar_color(Some(color));
    }
    Ok(())
}

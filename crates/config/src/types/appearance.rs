//! Appearance configuration for alert dialogs.
//!
//! Responsibilities:
//! - Define the persisted `AppearanceConfig` (serde, colors as strings).
//! - Define the runtime `Appearance` with resolved ratatui colors.
//! - Define the blur styles and shake animation settings shared with the TUI crate.
//!
//! Does NOT handle:
//! - Reading files or environment variables (see `loader`).
//! - Applying the appearance to a live alert (see `tui-alert`).
//!
//! Invariants:
//! - `AppearanceConfig` is the persisted representation; `Appearance` is the runtime one.
//! - `Appearance::background_alpha` is always within `[0.0, 1.0]`.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_BACKGROUND_ALPHA, DEFAULT_BACKGROUND_COLOR, DEFAULT_PROGRESS_BAR_COLOR,
    DEFAULT_SHAKE_AMPLITUDE, DEFAULT_SHAKE_DURATION_MS, DEFAULT_SHAKE_OSCILLATIONS,
};
use crate::types::ColorTheme;

/// Intensity of the dimmed backdrop drawn behind a presented alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BlurStyle {
    ExtraLight,
    Light,
    #[default]
    Dark,
}

impl fmt::Display for BlurStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtraLight => write!(f, "extra_light"),
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for BlurStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "extra_light" | "extralight" => Ok(Self::ExtraLight),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown blur style '{other}'")),
        }
    }
}

/// Shake animation tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShakeConfig {
    #[serde(default = "default_shake_duration_ms")]
    pub duration_ms: u64,
    #[serde(default = "default_shake_amplitude")]
    pub amplitude: u16,
    #[serde(default = "default_shake_oscillations")]
    pub oscillations: u16,
}

fn default_shake_duration_ms() -> u64 {
    DEFAULT_SHAKE_DURATION_MS
}

fn default_shake_amplitude() -> u16 {
    DEFAULT_SHAKE_AMPLITUDE
}

fn default_shake_oscillations() -> u16 {
    DEFAULT_SHAKE_OSCILLATIONS
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_SHAKE_DURATION_MS,
            amplitude: DEFAULT_SHAKE_AMPLITUDE,
            oscillations: DEFAULT_SHAKE_OSCILLATIONS,
        }
    }
}

/// Persisted appearance settings, as found in `appearance.json`.
///
/// Every field is optional in the file; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub theme: ColorTheme,
    pub tap_background_dismiss: bool,
    pub use_blur_background: bool,
    pub blur_style: BlurStyle,
    /// Any color accepted by ratatui: a name (`"black"`), `"#rrggbb"`, or an index.
    pub background_color: String,
    pub background_alpha: f32,
    pub progress_bar_color: String,
    pub shake: ShakeConfig,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            tap_background_dismiss: true,
            use_blur_background: true,
            blur_style: BlurStyle::default(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            background_alpha: DEFAULT_BACKGROUND_ALPHA,
            progress_bar_color: DEFAULT_PROGRESS_BAR_COLOR.to_string(),
            shake: ShakeConfig::default(),
        }
    }
}

/// Resolved runtime appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub theme: ColorTheme,
    pub tap_background_dismiss: bool,
    pub use_blur_background: bool,
    pub blur_style: BlurStyle,
    pub background_color: Color,
    pub background_alpha: f32,
    pub progress_bar_color: Color,
    pub shake: ShakeConfig,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            tap_background_dismiss: true,
            use_blur_background: true,
            blur_style: BlurStyle::default(),
            background_color: Color::Black,
            background_alpha: DEFAULT_BACKGROUND_ALPHA,
            progress_bar_color: Color::Blue,
            shake: ShakeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_style_from_str() {
        assert_eq!("extra-light".parse::<BlurStyle>(), Ok(BlurStyle::ExtraLight));
        assert_eq!("Light".parse::<BlurStyle>(), Ok(BlurStyle::Light));
        assert_eq!(" dark ".parse::<BlurStyle>(), Ok(BlurStyle::Dark));
        assert!("frosted".parse::<BlurStyle>().is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppearanceConfig =
            serde_json::from_str(r#"{"blur_style": "light", "shake": {"amplitude": 5}}"#).unwrap();
        assert_eq!(config.blur_style, BlurStyle::Light);
        assert_eq!(config.shake.amplitude, 5);
        assert_eq!(config.shake.duration_ms, DEFAULT_SHAKE_DURATION_MS);
        assert!(config.tap_background_dismiss);
        assert_eq!(config.background_color, "black");
    }

    #[test]
    fn test_default_config_matches_default_appearance() {
        let config = AppearanceConfig::default();
        let appearance = Appearance::default();
        assert_eq!(config.theme, appearance.theme);
        assert_eq!(config.background_alpha, appearance.background_alpha);
        assert_eq!(config.use_blur_background, appearance.use_blur_background);
    }
}

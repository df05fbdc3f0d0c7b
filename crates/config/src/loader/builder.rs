//! Appearance loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `AppearanceLoader` for layered configuration merging.
//! - Build the final runtime `Appearance`, resolving and validating colors.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - File reading logic (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - File values form the base layer; env vars and builder methods are overrides.
//! - Among overrides, the last call wins (call `from_env()` before `with_*`).
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use ratatui::style::Color;
use std::path::PathBuf;
use std::str::FromStr;

use super::env::{ENV_CONFIG_PATH, apply_env, env_var_or_none};
use super::error::ConfigError;
use super::file::{apply_file, default_config_path};
use crate::constants::MAX_SHAKE_AMPLITUDE;
use crate::types::{Appearance, AppearanceConfig, BlurStyle, ColorTheme, ShakeConfig};

/// Loader that builds an `Appearance` from a file, environment variables and overrides.
#[derive(Debug, Clone, Default)]
pub struct AppearanceLoader {
    base: AppearanceConfig,
    config_path: Option<PathBuf>,
    theme: Option<ColorTheme>,
    tap_background_dismiss: Option<bool>,
    use_blur_background: Option<bool>,
    blur_style: Option<BlurStyle>,
    background_color: Option<String>,
    background_alpha: Option<f32>,
    progress_bar_color: Option<String>,
    shake: Option<ShakeConfig>,
}

impl AppearanceLoader {
    /// Create a new loader with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` for invalid syntax and
    /// `ConfigError::DotenvIo` when the file exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the appearance file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read the appearance file as the base layer.
    ///
    /// Path resolution: `with_config_path()`, then `ALERT_CONFIG_PATH`, then the
    /// platform config directory.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let path = match self.config_path.clone() {
            Some(path) => path,
            None => match env_var_or_none(ENV_CONFIG_PATH) {
                Some(path) => PathBuf::from(path),
                None => default_config_path()?,
            },
        };
        apply_file(&mut self, &path)?;
        self.config_path = Some(path);
        Ok(self)
    }

    /// Read overrides from `ALERT_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Replace the base layer with an already parsed config.
    pub fn apply_config(&mut self, config: AppearanceConfig) {
        self.base = config;
    }

    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_use_blur_background(mut self, use_blur: bool) -> Self {
        self.use_blur_background = Some(use_blur);
        self
    }

    pub fn with_tap_background_dismiss(mut self, dismiss: bool) -> Self {
        self.tap_background_dismiss = Some(dismiss);
        self
    }

    pub fn with_shake(mut self, shake: ShakeConfig) -> Self {
        self.shake = Some(shake);
        self
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }

    pub(crate) fn set_tap_background_dismiss(&mut self, value: Option<bool>) {
        self.tap_background_dismiss = value;
    }

    pub(crate) fn set_use_blur_background(&mut self, value: Option<bool>) {
        self.use_blur_background = value;
    }

    pub(crate) fn set_blur_style(&mut self, style: Option<BlurStyle>) {
        self.blur_style = style;
    }

    pub(crate) fn set_background_color(&mut self, color: Option<String>) {
        self.background_color = color;
    }

    pub(crate) fn set_background_alpha(&mut self, alpha: Option<f32>) {
        self.background_alpha = alpha;
    }

    pub(crate) fn set_progress_bar_color(&mut self, color: Option<String>) {
        self.progress_bar_color = color;
    }

    /// The file path used by `from_file()`, if it has run.
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    /// Merge all layers into a validated runtime `Appearance`.
    pub fn build(self) -> Result<Appearance, ConfigError> {
        let background_color = self
            .background_color
            .unwrap_or(self.base.background_color);
        let progress_bar_color = self
            .progress_bar_color
            .unwrap_or(self.base.progress_bar_color);
        let background_alpha = self.background_alpha.unwrap_or(self.base.background_alpha);
        let shake = self.shake.unwrap_or(self.base.shake);

        if !(0.0..=1.0).contains(&background_alpha) {
            return Err(ConfigError::invalid(
                "background_alpha",
                format!("must be between 0.0 and 1.0, got {background_alpha}"),
            ));
        }
        if shake.amplitude > MAX_SHAKE_AMPLITUDE {
            return Err(ConfigError::invalid(
                "shake.amplitude",
                format!("must be at most {MAX_SHAKE_AMPLITUDE}, got {}", shake.amplitude),
            ));
        }
        if shake.duration_ms == 0 {
            return Err(ConfigError::invalid(
                "shake.duration_ms",
                "must be greater than zero",
            ));
        }

        Ok(Appearance {
            theme: self.theme.unwrap_or(self.base.theme),
            tap_background_dismiss: self
                .tap_background_dismiss
                .unwrap_or(self.base.tap_background_dismiss),
            use_blur_background: self
                .use_blur_background
                .unwrap_or(self.base.use_blur_background),
            blur_style: self.blur_style.unwrap_or(self.base.blur_style),
            background_color: parse_color("background_color", &background_color)?,
            background_alpha,
            progress_bar_color: parse_color("progress_bar_color", &progress_bar_color)?,
            shake,
        })
    }
}

/// Parse a color name, `#rrggbb` string, or palette index.
pub fn parse_color(var: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value.trim())
        .map_err(|_| ConfigError::invalid(var, format!("unrecognized color '{value}'")))
}

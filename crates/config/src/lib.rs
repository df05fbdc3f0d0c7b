//! Appearance configuration for tui-alert.
//!
//! This crate provides the theme palette, the persisted appearance file
//! format, and a layered loader (file, environment, builder overrides)
//! producing the runtime `Appearance` applied to alert dialogs.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    AppearanceLoader, ConfigError, default_config_path, env_var_or_none, parse_color,
    read_appearance_file,
};
pub use types::{Appearance, AppearanceConfig, BlurStyle, ColorTheme, ShakeConfig, Theme};

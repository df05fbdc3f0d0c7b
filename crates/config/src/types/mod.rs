//! Configuration type definitions for alert dialogs.
//!
//! Responsibilities:
//! - Define theme and appearance types.
//! - Ensure consistent defaults across the configuration system.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//!
//! Invariants:
//! - `ColorTheme` and `AppearanceConfig` are persisted; `Theme` and `Appearance` are runtime only.

mod appearance;
mod theme;

pub use appearance::{Appearance, AppearanceConfig, BlurStyle, ShakeConfig};
pub use theme::{ColorTheme, Theme};

//! Command-line argument parsing for tui-alert-demo.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Map the chosen demo mode onto an alert style.
//!
//! Does NOT handle:
//! - Appearance loading or validation (see `tui_alert_config`).
//! - Terminal state management (see `terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tui_alert::AlertStyle;
use tui_alert_config::ColorTheme;

/// Which alert the demo presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DemoMode {
    /// Confirmation with a cancel and a destructive button
    #[default]
    Normal,
    /// Password prompt that shakes on an empty submit
    TextInput,
    /// Simulated download with one gauge
    Progress,
    /// Simulated multi-step install with a status gauge and a step gauge
    DuoProgress,
}

impl From<DemoMode> for AlertStyle {
    fn from(mode: DemoMode) -> Self {
        match mode {
            DemoMode::Normal => AlertStyle::Normal,
            DemoMode::TextInput => AlertStyle::TextInput,
            DemoMode::Progress => AlertStyle::Progress,
            DemoMode::DuoProgress => AlertStyle::DuoProgress,
        }
    }
}

/// Command-line arguments for tui-alert-demo.
///
/// Appearance precedence (highest to lowest):
/// 1. CLI arguments (e.g., --no-blur, --theme)
/// 2. Environment variables (e.g., ALERT_USE_BLUR, ALERT_THEME)
/// 3. Appearance file (appearance.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "tui-alert-demo",
    about = "Interactive demo of modal alert dialogs in the terminal",
    version,
    after_help = "Examples:\n  tui-alert-demo\n  tui-alert-demo --mode text-input\n  tui-alert-demo --mode duo-progress --no-blur\n  tui-alert-demo --config-path ./appearance.json --theme high-contrast\n"
)]
pub struct Cli {
    /// Alert style to present
    #[arg(long, short = 'm', value_enum, default_value_t = DemoMode::Normal)]
    pub mode: DemoMode,

    /// Path to a custom appearance file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Use a flat translucent backdrop instead of blur
    #[arg(long)]
    pub no_blur: bool,

    /// Color theme (default, light, dark, high-contrast, monochrome)
    #[arg(long)]
    pub theme: Option<ColorTheme>,
}

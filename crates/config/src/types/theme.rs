//! Theme types for alert configuration.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Provide conversion from `ColorTheme` to `Theme`.
//!
//! Does NOT handle:
//! - Actual rendering (see the `tui-alert` crate).
//! - Per-alert overrides such as action tint or progress color.
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime representation.
//! - `Theme` is intentionally NOT serializable - always persist `ColorTheme`.
//! - `destructive` is the single source of the destructive button color.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Next theme in the cycle.
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "default" => Ok(Self::Default),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "high_contrast" => Ok(Self::HighContrast),
            "monochrome" => Ok(Self::Monochrome),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Dialog chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,

    // Buttons
    pub accent: Color,
    pub destructive: Color,
    pub disabled: Color,
    pub focus_fg: Color,

    // Text field
    pub input_border: Color,
    pub placeholder: Color,

    // Progress
    pub progress_track: Color,
}

impl Theme {
    /// Expand a persisted `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::White,

                accent: Color::Cyan,
                destructive: Color::Red,
                disabled: Color::DarkGray,
                focus_fg: Color::Black,

                input_border: Color::Gray,
                placeholder: Color::DarkGray,

                progress_track: Color::DarkGray,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::DarkGray,
                border: Color::Blue,
                title: Color::Black,

                accent: Color::Blue,
                destructive: Color::Red,
                disabled: Color::Gray,
                focus_fg: Color::White,

                input_border: Color::DarkGray,
                placeholder: Color::Gray,

                progress_track: Color::Gray,
            },
            ColorTheme::Dark => Self {
                background: Color::Indexed(235),
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Indexed(110), // soft blue/cyan
                title: Color::White,

                accent: Color::Indexed(75),
                destructive: Color::Indexed(203),
                disabled: Color::Indexed(240),
                focus_fg: Color::Indexed(235),

                input_border: Color::Indexed(244),
                placeholder: Color::Indexed(240),

                progress_track: Color::Indexed(238),
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                border: Color::White,
                title: Color::White,

                accent: Color::Yellow,
                destructive: Color::LightRed,
                disabled: Color::Gray,
                focus_fg: Color::Black,

                input_border: Color::White,
                placeholder: Color::Gray,

                progress_track: Color::Gray,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::White,
                title: Color::White,

                accent: Color::White,
                destructive: Color::White,
                disabled: Color::DarkGray,
                focus_fg: Color::Black,

                input_border: Color::Gray,
                placeholder: Color::DarkGray,

                progress_track: Color::DarkGray,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_theme() {
        let mut theme = ColorTheme::Default;
        let mut seen = vec![theme];
        for _ in 0..4 {
            theme = theme.cycle_next();
            seen.push(theme);
        }
        assert_eq!(theme.cycle_next(), ColorTheme::Default);
        seen.sort_by_key(|t| t.display_name());
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_color_theme_from_str() {
        assert_eq!("dark".parse::<ColorTheme>(), Ok(ColorTheme::Dark));
        assert_eq!(
            "High-Contrast".parse::<ColorTheme>(),
            Ok(ColorTheme::HighContrast)
        );
        assert!("neon".parse::<ColorTheme>().is_err());
    }

    #[test]
    fn test_color_theme_serde_snake_case() {
        let json = serde_json::to_string(&ColorTheme::HighContrast).unwrap();
        assert_eq!(json, "\"high_contrast\"");
    }

    #[test]
    fn test_default_theme_matches_default_color_theme() {
        assert_eq!(
            Theme::default(),
            Theme::from_color_theme(ColorTheme::Default)
        );
    }
}

//! Alert-specific theme helpers and style builders.
//!
//! This module extends `tui_alert_config::Theme` with ergonomic helpers
//! for building ratatui `Style` objects consistently across the dialog.

use ratatui::style::{Color, Modifier, Style};
use tui_alert_config::Theme;

use crate::action::{AlertAction, AlertActionStyle};

/// Trait extending Theme with helper methods for styling dialog parts.
pub trait ThemeExt {
    /// Dialog surface (text on background).
    fn surface(&self) -> Style;
    /// Dialog border.
    fn border(&self) -> Style;
    /// Title style (bold).
    fn title(&self) -> Style;
    /// Message body.
    fn message(&self) -> Style;
    /// Dimmed text such as progress labels.
    fn text_dim(&self) -> Style;
    /// Text field border.
    fn input_border(&self) -> Style;
    /// Text field placeholder.
    fn placeholder(&self) -> Style;
    /// Filled and unfilled parts of a progress gauge.
    fn gauge(&self, fill: Color) -> Style;
    /// A button, optionally focused.
    fn button(&self, action: &AlertAction, focused: bool) -> Style;
}

impl ThemeExt for Theme {
    fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.background)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.title)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    fn message(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim).bg(self.background)
    }

    fn input_border(&self) -> Style {
        Style::default().fg(self.input_border).bg(self.background)
    }

    fn placeholder(&self) -> Style {
        Style::default()
            .fg(self.placeholder)
            .bg(self.background)
            .add_modifier(Modifier::ITALIC)
    }

    fn gauge(&self, fill: Color) -> Style {
        Style::default().fg(fill).bg(self.progress_track)
    }

    fn button(&self, action: &AlertAction, focused: bool) -> Style {
        let color = action.render_color(self);
        let mut style = if focused && action.is_enabled() {
            Style::default().fg(self.focus_fg).bg(color)
        } else {
            Style::default().fg(color).bg(self.background)
        };
        if action.style() == AlertActionStyle::Cancel {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }
}

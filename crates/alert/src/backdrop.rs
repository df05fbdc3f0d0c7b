//! Backdrop painted over the host UI while an alert is presented.
//!
//! Responsibilities:
//! - Resolve the blur/flat background settings into a single `Backdrop`.
//! - Recolor the host's already-drawn cells without erasing them (blur, translucent flat).
//!
//! Does NOT handle:
//! - Drawing the dialog itself (see `render`).
//!
//! Invariants:
//! - Blur never changes cell symbols, only style.
//! - A flat backdrop only hides the host content once its alpha reaches 1.0.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use tui_alert_config::BlurStyle;
use tui_alert_config::constants::DEFAULT_BACKGROUND_ALPHA;

/// Flat backdrop color with an opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundColor {
    pub color: Color,
    /// Opacity in `[0.0, 1.0]`.
    pub alpha: f32,
}

impl BackgroundColor {
    pub fn new(color: Color, alpha: f32) -> Self {
        let alpha = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        Self { color, alpha }
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::new(Color::Black, DEFAULT_BACKGROUND_ALPHA)
    }
}

/// The effective backdrop of an alert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backdrop {
    Blur(BlurStyle),
    Flat(BackgroundColor),
}

impl Backdrop {
    /// Blur wins over the flat color when enabled.
    pub fn resolve(use_blur: bool, blur_style: BlurStyle, background: BackgroundColor) -> Self {
        if use_blur {
            Self::Blur(blur_style)
        } else {
            Self::Flat(background)
        }
    }

    fn blur_background(style: BlurStyle) -> Color {
        match style {
            BlurStyle::ExtraLight => Color::Gray,
            BlurStyle::Light => Color::DarkGray,
            BlurStyle::Dark => Color::Black,
        }
    }

    fn cell_style(&self) -> Option<Style> {
        match self {
            Self::Blur(style) => Some(
                Style::default()
                    .bg(Self::blur_background(*style))
                    .add_modifier(Modifier::DIM),
            ),
            Self::Flat(background) if background.alpha <= 0.0 => None,
            Self::Flat(background) => Some(
                Style::default()
                    .bg(background.color)
                    .add_modifier(Modifier::DIM),
            ),
        }
    }
}

impl Widget for Backdrop {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let opaque = matches!(self, Self::Flat(background) if background.alpha >= 1.0);
        let Some(style) = self.cell_style() else {
            return;
        };

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    if opaque {
                        cell.reset();
                    }
                    cell.set_style(style);
                }
            }
        }
    }
}

//! Alert action descriptors.
//!
//! Responsibilities:
//! - Define the button style enumeration (`AlertActionStyle`).
//! - Define `AlertAction`: title, style, handler, tint override, enabled flag.
//! - Resolve the color a button is drawn with.
//!
//! Does NOT handle:
//! - Dispatching handlers (see `controller`).
//! - Button placement (see `layout`).
//!
//! Invariants:
//! - Title, style and handler never change after construction.
//! - Destructive actions always render with the theme's destructive color.
//! - The `id` is unique per constructed action; clones share it.

use std::fmt;
use std::rc::Rc;

use ratatui::style::Color;
use tui_alert_config::Theme;
use uuid::Uuid;

use crate::controller::AlertController;

/// Callback run when an action's button is activated.
///
/// Receives the owning controller and the action that fired, so it can
/// inspect the button and drive the alert (dismiss, shake, update progress)
/// without capturing the controller.
pub type ActionHandler = Rc<dyn Fn(&mut AlertController, &AlertAction)>;

/// Visual style of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlertActionStyle {
    #[default]
    Default,
    /// Bound to `Esc`; drawn bold.
    Cancel,
    /// Drawn in the theme's destructive color; ignores tint overrides.
    Destructive,
}

/// A single button of an alert.
#[derive(Clone)]
pub struct AlertAction {
    id: Uuid,
    title: String,
    style: AlertActionStyle,
    handler: Option<ActionHandler>,
    tint_color: Option<Color>,
    enabled: bool,
}

impl AlertAction {
    /// Create an action with an optional handler.
    pub fn new(
        title: impl Into<String>,
        style: AlertActionStyle,
        handler: Option<ActionHandler>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            style,
            handler,
            tint_color: None,
            enabled: true,
        }
    }

    /// Create an action from a closure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tui_alert::{AlertAction, AlertActionStyle};
    ///
    /// let ok = AlertAction::with_handler("OK", AlertActionStyle::Default, |alert, _action| {
    ///     alert.dismiss();
    /// });
    /// assert_eq!(ok.title(), "OK");
    /// ```
    pub fn with_handler<F>(title: impl Into<String>, style: AlertActionStyle, handler: F) -> Self
    where
        F: Fn(&mut AlertController, &AlertAction) + 'static,
    {
        Self::new(title, style, Some(Rc::new(handler)))
    }

    /// Create an action that only dismisses the alert.
    pub fn without_handler(title: impl Into<String>, style: AlertActionStyle) -> Self {
        Self::new(title, style, None)
    }

    /// Builder form of [`AlertAction::set_tint_color`].
    pub fn tint(mut self, color: Color) -> Self {
        self.tint_color = Some(color);
        self
    }

    /// Builder form of [`AlertAction::set_enabled`].
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn style(&self) -> AlertActionStyle {
        self.style
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub(crate) fn handler(&self) -> Option<&ActionHandler> {
        self.handler.as_ref()
    }

    pub fn is_cancel(&self) -> bool {
        self.style == AlertActionStyle::Cancel
    }

    /// The tint override, if one was set. Stored even for destructive
    /// actions, but never used to draw them.
    pub fn tint_color(&self) -> Option<Color> {
        self.tint_color
    }

    pub fn set_tint_color(&mut self, color: Option<Color>) {
        self.tint_color = color;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The color this action's title is drawn with.
    pub fn render_color(&self, theme: &Theme) -> Color {
        if !self.enabled {
            return theme.disabled;
        }
        match self.style {
            AlertActionStyle::Destructive => theme.destructive,
            AlertActionStyle::Default | AlertActionStyle::Cancel => {
                self.tint_color.unwrap_or(theme.accent)
            }
        }
    }
}

impl fmt::Debug for AlertAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertAction")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("style", &self.style)
            .field("has_handler", &self.handler.is_some())
            .field("tint_color", &self.tint_color)
            .field("enabled", &self.enabled)
            .finish()
    }
}

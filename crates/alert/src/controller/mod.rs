//! The alert controller: state and operations of one alert dialog.
//!
//! Responsibilities:
//! - Hold title, message, ordered actions, appearance and progress state.
//! - Dispatch action handlers with back-references to the controller and the action.
//! - Track presentation, focus, and the shake animation.
//!
//! Does NOT handle:
//! - Drawing (see `render`) or geometry (see `layout`).
//! - Translating terminal events (see `input` and `mouse` submodules).
//!
//! Invariants:
//! - `style` is fixed at construction.
//! - `percentage` is always within `[0.0, 1.0]`.
//! - Progress setters are ignored outside progress styles; nothing here returns an error.
//! - Actions keep insertion order; the collection is never reordered or truncated.

mod input;
mod mouse;

use std::time::Instant;

use ratatui::style::Color;
use tracing::{debug, warn};
use tui_alert_config::{Appearance, BlurStyle, ShakeConfig};

use crate::action::AlertAction;
use crate::backdrop::{Backdrop, BackgroundColor};
use crate::layout::AlertLayout;
use crate::progress::{ProgressStatus, clamp_percentage};
use crate::shake::ShakeAnimation;
use crate::text_field::TextField;

pub use input::AlertEvent;

/// Display mode of an alert, chosen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlertStyle {
    /// Title, message and buttons.
    #[default]
    Normal,
    /// Adds a single-line text field.
    TextInput,
    /// Adds one progress gauge with a percentage label.
    Progress,
    /// Adds a status gauge above the percentage gauge.
    DuoProgress,
}

impl AlertStyle {
    pub fn is_progress(self) -> bool {
        matches!(self, Self::Progress | Self::DuoProgress)
    }
}

/// A modal alert dialog.
///
/// # Example
///
/// ```rust
/// use tui_alert::{AlertAction, AlertActionStyle, AlertController, AlertStyle};
///
/// let mut alert = AlertController::new("Delete file?", "This cannot be undone.", AlertStyle::Normal);
/// alert.add_action(AlertAction::without_handler("Cancel", AlertActionStyle::Cancel));
/// alert.add_action(AlertAction::with_handler("Delete", AlertActionStyle::Destructive, |alert, _| {
///     alert.dismiss();
/// }));
/// alert.present();
/// assert_eq!(alert.actions().len(), 2);
/// ```
#[derive(Debug)]
pub struct AlertController {
    title: String,
    message: String,
    style: AlertStyle,
    actions: Vec<AlertAction>,

    tap_background_dismiss: bool,
    use_blur_background: bool,
    blur_style: BlurStyle,
    background_color: BackgroundColor,
    progress_bar_color: Color,

    percentage: f64,
    progress_status: ProgressStatus,
    text_field: TextField,

    focused: Option<usize>,
    presented: bool,
    shake: ShakeAnimation,
    last_layout: Option<AlertLayout>,
}

impl AlertController {
    /// Create an alert with the default appearance.
    pub fn new(title: impl Into<String>, message: impl Into<String>, style: AlertStyle) -> Self {
        let mut alert = Self {
            title: title.into(),
            message: message.into(),
            style,
            actions: Vec::new(),
            tap_background_dismiss: true,
            use_blur_background: true,
            blur_style: BlurStyle::default(),
            background_color: BackgroundColor::default(),
            progress_bar_color: Color::Blue,
            percentage: 0.0,
            progress_status: ProgressStatus::default(),
            text_field: TextField::new(),
            focused: None,
            presented: false,
            shake: ShakeAnimation::default(),
            last_layout: None,
        };
        alert.apply_appearance(&Appearance::default());
        alert
    }

    /// Builder form of [`AlertController::apply_appearance`].
    pub fn with_appearance(mut self, appearance: &Appearance) -> Self {
        self.apply_appearance(appearance);
        self
    }

    /// Apply loaded appearance settings.
    ///
    /// The progress color is only taken in progress styles, like the setter.
    pub fn apply_appearance(&mut self, appearance: &Appearance) {
        self.tap_background_dismiss = appearance.tap_background_dismiss;
        self.use_blur_background = appearance.use_blur_background;
        self.blur_style = appearance.blur_style;
        self.background_color =
            BackgroundColor::new(appearance.background_color, appearance.background_alpha);
        if self.style.is_progress() {
            self.progress_bar_color = appearance.progress_bar_color;
        }
        self.shake.configure(appearance.shake);
    }

    // ---------------------------------------------------------------------
    // Content
    // ---------------------------------------------------------------------

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn style(&self) -> AlertStyle {
        self.style
    }

    // ---------------------------------------------------------------------
    // Actions
    // ---------------------------------------------------------------------

    /// Append an action. No deduplication and no limit.
    pub fn add_action(&mut self, action: AlertAction) {
        if action.is_cancel() && self.cancel_action_index().is_some() {
            warn!(
                title = %action.title(),
                "Alert already has a cancel action; Esc stays bound to the first one"
            );
        }
        self.actions.push(action);
        if self.focused.is_none() {
            self.focused = self.first_enabled_action();
        }
    }

    /// Actions in display order.
    pub fn actions(&self) -> &[AlertAction] {
        &self.actions
    }

    /// Mutable access to one action's tint and enabled flag.
    pub fn action_mut(&mut self, index: usize) -> Option<&mut AlertAction> {
        self.actions.get_mut(index)
    }

    pub(crate) fn cancel_action_index(&self) -> Option<usize> {
        self.actions.iter().position(AlertAction::is_cancel)
    }

    fn first_enabled_action(&self) -> Option<usize> {
        self.actions.iter().position(AlertAction::is_enabled)
    }

    /// Index of the focused button, if any enabled button exists.
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
            .filter(|i| self.actions.get(*i).is_some_and(AlertAction::is_enabled))
    }

    /// Focus a button. Disabled or missing buttons are not focusable.
    pub fn set_focus(&mut self, index: usize) -> bool {
        if self.actions.get(index).is_some_and(AlertAction::is_enabled) {
            self.focused = Some(index);
            true
        } else {
            false
        }
    }

    /// Move focus to the next enabled button, wrapping around.
    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    /// Move focus to the previous enabled button, wrapping around.
    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let len = self.actions.len();
        if len == 0 {
            return;
        }
        let start = self.focused_index().unwrap_or(if forward { len - 1 } else { 0 });
        for step in 1..=len {
            let candidate = if forward {
                (start + step) % len
            } else {
                (start + len - step % len) % len
            };
            if self.actions[candidate].is_enabled() {
                self.focused = Some(candidate);
                return;
            }
        }
        self.focused = None;
    }

    /// Activate the action at `index` as if its button had been pressed.
    ///
    /// The handler runs synchronously with the controller and a snapshot of
    /// the action. Actions without a handler dismiss the alert; actions with
    /// one leave dismissal to the handler.
    pub fn activate(&mut self, index: usize) -> AlertEvent {
        let Some(action) = self.actions.get(index).cloned() else {
            return AlertEvent::Ignored;
        };
        if !action.is_enabled() {
            debug!(title = %action.title(), "Ignoring activation of disabled action");
            return AlertEvent::Consumed;
        }

        debug!(title = %action.title(), style = ?action.style(), "Alert action fired");
        self.focused = Some(index);
        match action.handler() {
            Some(handler) => handler(self, &action),
            None => self.dismiss(),
        }

        AlertEvent::ActionFired {
            index,
            id: action.id(),
        }
    }

    // ---------------------------------------------------------------------
    // Presentation
    // ---------------------------------------------------------------------

    pub fn present(&mut self) {
        if self.focused_index().is_none() {
            self.focused = self.first_enabled_action();
        }
        self.presented = true;
        self.last_layout = None;
        debug!(title = %self.title, style = ?self.style, actions = self.actions.len(), "Presenting alert");
    }

    pub fn dismiss(&mut self) {
        if self.presented {
            debug!(title = %self.title, "Dismissing alert");
        }
        self.presented = false;
        self.shake.stop();
        self.last_layout = None;
    }

    pub fn is_presented(&self) -> bool {
        self.presented
    }

    // ---------------------------------------------------------------------
    // Background
    // ---------------------------------------------------------------------

    pub fn tap_background_dismiss(&self) -> bool {
        self.tap_background_dismiss
    }

    pub fn set_tap_background_dismiss(&mut self, enabled: bool) {
        self.tap_background_dismiss = enabled;
    }

    pub fn use_blur_background(&self) -> bool {
        self.use_blur_background
    }

    pub fn set_use_blur_background(&mut self, enabled: bool) {
        self.use_blur_background = enabled;
    }

    pub fn blur_style(&self) -> BlurStyle {
        self.blur_style
    }

    pub fn set_blur_style(&mut self, style: BlurStyle) {
        self.blur_style = style;
    }

    /// Flat backdrop color; ignored while the blur backdrop is enabled.
    pub fn background_color(&self) -> BackgroundColor {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: BackgroundColor) {
        self.background_color = color;
    }

    /// The backdrop that will actually be drawn.
    pub fn backdrop(&self) -> Backdrop {
        Backdrop::resolve(
            self.use_blur_background,
            self.blur_style,
            self.background_color,
        )
    }

    // ---------------------------------------------------------------------
    // Progress
    // ---------------------------------------------------------------------

    pub fn progress_bar_color(&self) -> Color {
        self.progress_bar_color
    }

    /// Tint every gauge. Ignored outside progress styles.
    pub fn set_progress_bar_color(&mut self, color: Color) {
        if !self.style.is_progress() {
            debug!(style = ?self.style, "Ignoring progress color on non-progress alert");
            return;
        }
        self.progress_bar_color = color;
    }

    /// Current value of the solo/lower gauge, in `[0.0, 1.0]`.
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Set the solo/lower gauge. Out-of-range values are pinned to
    /// `[0.0, 1.0]`. Ignored outside progress styles.
    pub fn set_percentage(&mut self, percentage: f64) {
        if !self.style.is_progress() {
            debug!(style = ?self.style, "Ignoring percentage on non-progress alert");
            return;
        }
        self.percentage = clamp_percentage(percentage);
    }

    pub fn progress_status(&self) -> ProgressStatus {
        self.progress_status
    }

    /// Set the upper gauge of a dual-progress alert. Ignored in every other style.
    pub fn set_progress_status(&mut self, status: ProgressStatus) {
        if self.style != AlertStyle::DuoProgress {
            debug!(style = ?self.style, "Ignoring progress status on non-dual-progress alert");
            return;
        }
        self.progress_status = status;
    }

    // ---------------------------------------------------------------------
    // Text input
    // ---------------------------------------------------------------------

    pub fn text_field(&self) -> &TextField {
        &self.text_field
    }

    pub fn text_field_mut(&mut self) -> &mut TextField {
        &mut self.text_field
    }

    /// Current text of the field (empty outside text-input alerts).
    pub fn text(&self) -> &str {
        self.text_field.value()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text_field.set_value(text);
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.text_field.set_placeholder(placeholder);
    }

    // ---------------------------------------------------------------------
    // Shake
    // ---------------------------------------------------------------------

    /// Shake the dialog sideways, e.g. to reject the entered text.
    /// Each call restarts the animation.
    pub fn shake_alert_view(&mut self) {
        self.shake_alert_view_at(Instant::now());
    }

    pub fn shake_alert_view_at(&mut self, now: Instant) {
        self.shake.trigger_at(now);
        debug!(title = %self.title, count = self.shake.trigger_count(), "Shaking alert");
    }

    pub fn shake(&self) -> &ShakeAnimation {
        &self.shake
    }

    pub fn set_shake_config(&mut self, config: ShakeConfig) {
        self.shake.configure(config);
    }

    /// Horizontal offset of the dialog at `now`.
    pub fn shake_offset_at(&self, now: Instant) -> i16 {
        self.shake.offset_at(now)
    }

    /// Advance animations. Returns true while a redraw is needed for motion.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.shake.tick(now)
    }

    // ---------------------------------------------------------------------
    // Layout bookkeeping
    // ---------------------------------------------------------------------

    /// Layout of the most recent render, used for mouse hit testing.
    pub fn last_layout(&self) -> Option<&AlertLayout> {
        self.last_layout.as_ref()
    }

    pub(crate) fn set_last_layout(&mut self, layout: AlertLayout) {
        self.last_layout = Some(layout);
    }
}

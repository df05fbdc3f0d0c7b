//! Mouse handling for a presented alert.
//!
//! Responsibilities:
//! - Fire the action whose button was clicked.
//! - Dismiss on a click outside the dialog when background dismissal is on.
//! - Move focus to the enabled button under the pointer.
//!
//! Does NOT handle:
//! - Geometry; hit testing uses the layout recorded by the last render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::{AlertController, AlertEvent};

impl AlertController {
    /// Handle a mouse event.
    ///
    /// Before the first render there is no layout to hit test, so clicks
    /// are swallowed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> AlertEvent {
        if !self.presented {
            return AlertEvent::Ignored;
        }
        let Some(layout) = self.last_layout.as_ref() else {
            return AlertEvent::Consumed;
        };
        let (col, row) = (mouse.column, mouse.row);
        let button = layout.button_at(col, row);
        let inside = layout.contains(col, row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match button {
                Some(index) => self.activate(index),
                None if inside => AlertEvent::Consumed,
                None if self.tap_background_dismiss => {
                    self.dismiss();
                    AlertEvent::Dismissed
                }
                None => AlertEvent::Consumed,
            },
            MouseEventKind::Moved => {
                if let Some(index) = button {
                    self.set_focus(index);
                }
                AlertEvent::Consumed
            }
            _ => AlertEvent::Consumed,
        }
    }
}

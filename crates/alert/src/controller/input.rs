//! Keyboard handling for a presented alert.
//!
//! Responsibilities:
//! - Route keys to focus movement, action activation, cancel, or the text field.
//! - Report the outcome as an `AlertEvent` so the host knows whether to keep routing.
//!
//! Invariants:
//! - A presented alert is modal: every key is either handled or swallowed.
//! - A dismissed alert ignores all keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use uuid::Uuid;

use super::{AlertController, AlertStyle};

/// Outcome of feeding an event to an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertEvent {
    /// The alert is not presented; the host should handle the event.
    Ignored,
    /// The alert swallowed the event without firing an action.
    Consumed,
    /// An action ran. The alert may or may not still be presented.
    ActionFired { index: usize, id: Uuid },
    /// The alert was dismissed without firing an action.
    Dismissed,
}

impl AlertEvent {
    /// True unless the host should still process the event.
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

impl AlertController {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> AlertEvent {
        if !self.presented {
            return AlertEvent::Ignored;
        }
        if key.kind == KeyEventKind::Release {
            return AlertEvent::Consumed;
        }

        match key.code {
            KeyCode::Esc => self.cancel(),
            KeyCode::Enter => match self.focused_index() {
                Some(index) => self.activate(index),
                None => AlertEvent::Consumed,
            },
            KeyCode::Tab => {
                self.focus_next();
                AlertEvent::Consumed
            }
            KeyCode::BackTab => {
                self.focus_prev();
                AlertEvent::Consumed
            }
            KeyCode::Down => {
                self.focus_next();
                AlertEvent::Consumed
            }
            KeyCode::Up => {
                self.focus_prev();
                AlertEvent::Consumed
            }
            _ if self.style == AlertStyle::TextInput => {
                self.text_field.handle_key(key);
                AlertEvent::Consumed
            }
            KeyCode::Right | KeyCode::Char('l')
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.focus_next();
                AlertEvent::Consumed
            }
            KeyCode::Left | KeyCode::Char('h')
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.focus_prev();
                AlertEvent::Consumed
            }
            _ => AlertEvent::Consumed,
        }
    }

    /// Fire the first cancel action, or dismiss when there is none and
    /// background dismissal is allowed.
    pub fn cancel(&mut self) -> AlertEvent {
        if !self.presented {
            return AlertEvent::Ignored;
        }
        match self.cancel_action_index() {
            Some(index) => self.activate(index),
            None if self.tap_background_dismiss => {
                self.dismiss();
                AlertEvent::Dismissed
            }
            None => AlertEvent::Consumed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{AlertAction, AlertActionStyle};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_keys_ignored_when_not_presented() {
        let mut alert = AlertController::new("T", "M", AlertStyle::Normal);
        alert.add_action(AlertAction::without_handler("OK", AlertActionStyle::Default));
        assert_eq!(alert.handle_key(key(KeyCode::Enter)), AlertEvent::Ignored);
        assert!(!AlertEvent::Ignored.is_handled());
    }

    #[test]
    fn test_release_is_swallowed() {
        let mut alert = AlertController::new("T", "M", AlertStyle::Normal);
        alert.add_action(AlertAction::without_handler("OK", AlertActionStyle::Default));
        alert.present();
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(alert.handle_key(release), AlertEvent::Consumed);
        assert!(alert.is_presented());
    }

    #[test]
    fn test_esc_without_cancel_respects_background_dismiss() {
        let mut alert = AlertController::new("T", "M", AlertStyle::Normal);
        alert.set_tap_background_dismiss(false);
        alert.present();
        assert_eq!(alert.handle_key(key(KeyCode::Esc)), AlertEvent::Consumed);
        assert!(alert.is_presented());

        alert.set_tap_background_dismiss(true);
        assert_eq!(alert.handle_key(key(KeyCode::Esc)), AlertEvent::Dismissed);
        assert!(!alert.is_presented());
    }

    #[test]
    fn test_letters_edit_text_instead_of_moving_focus() {
        let mut alert = AlertController::new("T", "M", AlertStyle::TextInput);
        alert.add_action(AlertAction::without_handler("A", AlertActionStyle::Default));
        alert.add_action(AlertAction::without_handler("B", AlertActionStyle::Default));
        alert.present();
        alert.handle_key(key(KeyCode::Char('l')));
        assert_eq!(alert.text(), "l");
        assert_eq!(alert.focused_index(), Some(0));
    }

    #[test]
    fn test_vim_keys_move_focus_in_normal_mode() {
        let mut alert = AlertController::new("T", "M", AlertStyle::Normal);
        alert.add_action(AlertAction::without_handler("A", AlertActionStyle::Default));
        alert.add_action(AlertAction::without_handler("B", AlertActionStyle::Default));
        alert.present();
        alert.handle_key(key(KeyCode::Char('l')));
        assert_eq!(alert.focused_index(), Some(1));
        alert.handle_key(key(KeyCode::Char('h')));
        assert_eq!(alert.focused_index(), Some(0));
    }
}

//! Single-line text field for text-input alerts.
//!
//! Wraps `tui_input::Input` with placeholder text, optional masking, and
//! the editing shortcuts of the host's other text inputs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};
use unicode_width::UnicodeWidthChar;

/// Character drawn in place of each typed character when masking.
pub const MASK_CHAR: char = '•';

/// Single-line text field.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    input: Input,
    placeholder: Option<String>,
    secure: bool,
}

impl TextField {
    /// Create a new empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key event using the InputRequest pattern.
    ///
    /// Returns true when the key was an editing key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let req = match key.code {
                KeyCode::Left => InputRequest::GoToPrevWord,
                KeyCode::Right => InputRequest::GoToNextWord,
                // Ctrl+U: clear line
                KeyCode::Char('u') => InputRequest::DeleteLine,
                // Ctrl+W: delete previous word
                KeyCode::Char('w') => InputRequest::DeletePrevWord,
                KeyCode::Char('a') => InputRequest::GoToStart,
                KeyCode::Char('e') => InputRequest::GoToEnd,
                _ => return false,
            };
            self.input.handle(req);
            return true;
        }

        let req = match key.code {
            KeyCode::Char(c) => InputRequest::InsertChar(c),
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return false,
        };
        self.input.handle(req);
        true
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    pub fn clear(&mut self) {
        self.input.reset();
    }

    /// Cursor position (character index).
    pub fn cursor_position(&self) -> usize {
        self.input.cursor()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = Some(placeholder.into());
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Mask the typed text when drawn (passwords).
    pub fn set_secure(&mut self, secure: bool) {
        self.secure = secure;
    }

    /// Text to draw in a field `width` cells wide, and the cursor column within it.
    pub fn visible(&self, width: usize) -> (String, u16) {
        if self.secure {
            // Every masked character is one cell wide.
            let cursor = self.input.cursor();
            let scroll = cursor.saturating_sub(width);
            let count = self.input.value().chars().count().saturating_sub(scroll).min(width);
            let shown = std::iter::repeat_n(MASK_CHAR, count).collect();
            return (shown, column(cursor - scroll));
        }

        let scroll = self.input.visual_scroll(width);
        let mut skipped = 0;
        let mut used = 0;
        let mut shown = String::new();
        for ch in self.input.value().chars() {
            let ch_width = ch.width().unwrap_or(0);
            if skipped < scroll {
                skipped += ch_width;
                continue;
            }
            if used + ch_width > width {
                break;
            }
            shown.push(ch);
            used += ch_width;
        }
        let cursor = self.input.visual_cursor().saturating_sub(scroll);
        (shown, column(cursor))
    }
}

fn column(cells: usize) -> u16 {
    u16::try_from(cells).unwrap_or(u16::MAX)
}

impl std::fmt::Display for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(field: &mut TextField, s: &str) {
        for c in s.chars() {
            field.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::new();
        type_str(&mut field, "hello");
        assert_eq!(field.value(), "hello");
        field.handle_key(key(KeyCode::Backspace));
        assert_eq!(field.value(), "hell");
        assert_eq!(field.cursor_position(), 4);
    }

    #[test]
    fn test_cursor_editing_in_middle() {
        let mut field = TextField::new();
        type_str(&mut field, "ac");
        field.handle_key(key(KeyCode::Left));
        field.handle_key(key(KeyCode::Char('b')));
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut field = TextField::new();
        type_str(&mut field, "secret");
        assert!(field.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert!(field.is_empty());
    }

    #[test]
    fn test_non_editing_key_not_handled() {
        let mut field = TextField::new();
        assert!(!field.handle_key(key(KeyCode::Enter)));
        assert!(!field.handle_key(key(KeyCode::Tab)));
    }

    #[test]
    fn test_secure_masks_visible_text() {
        let mut field = TextField::new();
        field.set_secure(true);
        type_str(&mut field, "pw");
        let (shown, cursor) = field.visible(10);
        assert_eq!(shown, "••");
        assert_eq!(cursor, 2);
        assert_eq!(field.value(), "pw");
    }

    #[test]
    fn test_visible_scrolls_to_cursor() {
        let mut field = TextField::new();
        type_str(&mut field, "abcdefghij");
        let (shown, cursor) = field.visible(4);
        assert!(shown.ends_with('j'));
        assert!(shown.chars().count() <= 4);
        assert!(cursor <= 4);
    }

    #[test]
    fn test_visible_scrolls_wide_text_by_cells() {
        use unicode_width::UnicodeWidthStr;

        let mut field = TextField::new();
        type_str(&mut field, "日本語テキスト");
        let (shown, cursor) = field.visible(6);
        assert_eq!(shown, "キスト");
        assert_eq!(shown.width(), 6);
        assert_eq!(cursor, 6);

        field.handle_key(key(KeyCode::Home));
        let (shown, cursor) = field.visible(6);
        assert_eq!(shown, "日本語");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_secure_scrolls_by_character() {
        let mut field = TextField::new();
        field.set_secure(true);
        type_str(&mut field, "日本語テキスト");
        let (shown, cursor) = field.visible(4);
        assert_eq!(shown, "••••");
        assert_eq!(cursor, 4);
    }

    #[test]
    fn test_set_value_and_clear() {
        let mut field = TextField::new();
        field.set_value("preset");
        assert_eq!(field.to_string(), "preset");
        field.clear();
        assert!(field.is_empty());
    }
}

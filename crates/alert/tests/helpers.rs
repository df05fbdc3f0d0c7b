//! Test helpers for alert testing.
//!
//! Provides key and mouse event constructors and a `TestBackend` harness
//! that draws a host screen with an alert on top.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Terminal,
    backend::TestBackend,
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Wrap},
};
use tui_alert::{AlertController, Theme, render_alert};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Tab key event.
pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

/// Create a Shift+Tab key event.
pub fn backtab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
}

/// Create a Backspace key event.
pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Type a string one character at a time.
pub fn type_text(alert: &mut AlertController, text: &str) {
    for c in text.chars() {
        alert.handle_key(key(c));
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Create a left click at a cell.
pub fn click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Create a pointer move to a cell.
pub fn hover(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Moved, column, row)
}

/// Center cell of a rect.
pub fn center(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

/// Test harness drawing a filler host screen with the alert on top.
pub struct AlertHarness {
    pub terminal: Terminal<TestBackend>,
    pub theme: Theme,
}

impl AlertHarness {
    /// Create a new harness with the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        Self {
            terminal,
            theme: Theme::default(),
        }
    }

    /// Render host content plus the alert and return the buffer contents.
    pub fn render(&mut self, alert: &mut AlertController) -> String {
        let theme = self.theme;
        self.terminal
            .draw(|f| {
                let area = f.area();
                let filler = "host ".repeat(usize::from(area.width) * usize::from(area.height) / 5);
                f.render_widget(Paragraph::new(filler).wrap(Wrap { trim: false }), area);
                render_alert(f, alert, &theme);
            })
            .expect("Failed to render");
        buffer_to_string(self.buffer())
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }
}

/// Convert a ratatui Buffer to a string for assertions.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Text of one buffer row.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area();
    (area.left()..area.right())
        .map(|x| buffer[(x, y)].symbol().chars().next().unwrap_or(' '))
        .collect()
}

//! Terminal setup and restoration.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen, with optional mouse capture.
//! - Restore the terminal on drop, including during panics.
//!
//! Invariants:
//! - `TerminalGuard::enter` is the only place the terminal is switched into raw mode.
//! - Drop implementation must not panic.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Guard that restores terminal state when dropped.
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    /// Switch the terminal into TUI mode.
    ///
    /// # Arguments
    /// * `stdout` - The stream the TUI draws to
    /// * `mouse` - Whether to enable mouse capture
    pub fn enter(stdout: &mut Stdout, mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { mouse };
        if mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Drop must not panic, so errors are ignored.
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
    }
}

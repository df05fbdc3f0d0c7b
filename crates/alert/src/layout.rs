//! Geometry of an alert dialog.
//!
//! Responsibilities:
//! - Size the dialog from its content within the width bounds.
//! - Center it in the frame, shifted by the shake offset.
//! - Split it into title, message, mode body, and button rows.
//!
//! Does NOT handle:
//! - Drawing (see `render`).
//!
//! Invariants:
//! - The dialog never extends past the frame, even while shaking.
//! - One or two buttons share a row; three or more are stacked one per row.
//! - Button rects are in action order, so a rect's index is the action's index.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::text::Span;
use tui_alert_config::constants::{MAX_ALERT_WIDTH, MIN_ALERT_WIDTH};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::controller::{AlertController, AlertStyle};

/// Border plus one cell of padding on each side.
const HORIZONTAL_CHROME: u16 = 4;
/// Top and bottom border.
const VERTICAL_CHROME: u16 = 2;
/// Space between buttons sharing a row.
const BUTTON_GAP: u16 = 2;
/// A button is drawn as `[ Title ]`.
const BUTTON_PADDING: u16 = 4;
/// Up to this many buttons share a single row.
const MAX_INLINE_BUTTONS: usize = 2;

/// Areas of the mode-specific part of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyLayout {
    #[default]
    None,
    TextInput { field: Rect },
    Progress { gauge: Rect, label: Rect },
    DuoProgress {
        status_gauge: Rect,
        status_label: Rect,
        gauge: Rect,
        label: Rect,
    },
}

impl BodyLayout {
    fn height(style: AlertStyle) -> u16 {
        match style {
            AlertStyle::Normal => 0,
            AlertStyle::TextInput => 3,
            AlertStyle::Progress => 2,
            AlertStyle::DuoProgress => 4,
        }
    }

    fn split(style: AlertStyle, area: Rect) -> Self {
        match style {
            AlertStyle::Normal => Self::None,
            AlertStyle::TextInput => Self::TextInput { field: area },
            AlertStyle::Progress => {
                let [gauge, label] = Layout::vertical([Constraint::Length(1); 2]).areas(area);
                Self::Progress { gauge, label }
            }
            AlertStyle::DuoProgress => {
                let [status_gauge, status_label, gauge, label] =
                    Layout::vertical([Constraint::Length(1); 4]).areas(area);
                Self::DuoProgress {
                    status_gauge,
                    status_label,
                    gauge,
                    label,
                }
            }
        }
    }
}

/// Computed areas of one alert frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertLayout {
    pub dialog: Rect,
    pub title: Rect,
    pub message: Rect,
    pub body: BodyLayout,
    /// One rect per action, in action order.
    pub buttons: Vec<Rect>,
    pub title_lines: Vec<String>,
    pub message_lines: Vec<String>,
}

impl AlertLayout {
    /// Lay out `alert` centered in `area`, shifted by `shake_offset` columns.
    pub fn compute(area: Rect, alert: &AlertController, shake_offset: i16) -> Self {
        let titles: Vec<&str> = alert.actions().iter().map(|a| a.title()).collect();
        let stacked = titles.len() > MAX_INLINE_BUTTONS;

        let width = dialog_width(alert.title(), alert.message(), &titles, stacked).min(area.width);
        let inner_width = width.saturating_sub(HORIZONTAL_CHROME).max(1);

        let title_lines = wrap_text(alert.title(), inner_width);
        let message_lines = wrap_text(alert.message(), inner_width);

        let body_height = BodyLayout::height(alert.style());
        let button_rows = match titles.len() {
            0 => 0,
            n if stacked => saturating_u16(n),
            _ => 1,
        };
        let body_gap = u16::from(body_height > 0);
        let button_gap = u16::from(button_rows > 0);

        let content_height = saturating_u16(title_lines.len().saturating_add(message_lines.len()));
        let height = content_height
            .saturating_add(body_gap)
            .saturating_add(body_height)
            .saturating_add(button_gap)
            .saturating_add(button_rows)
            .saturating_add(VERTICAL_CHROME)
            .min(area.height);

        let dialog = place(area, width, height, shake_offset);
        let inner = dialog.inner(Margin::new(HORIZONTAL_CHROME / 2, VERTICAL_CHROME / 2));

        let [title, message, _, body, _, button_area] = Layout::vertical([
            Constraint::Length(saturating_u16(title_lines.len())),
            Constraint::Length(saturating_u16(message_lines.len())),
            Constraint::Length(body_gap),
            Constraint::Length(body_height),
            Constraint::Length(button_gap),
            Constraint::Length(button_rows),
        ])
        .areas(inner);

        let buttons = if stacked {
            stacked_buttons(button_area, titles.len())
        } else {
            inline_buttons(button_area, &titles)
        };

        Self {
            dialog,
            title,
            message,
            body: BodyLayout::split(alert.style(), body),
            buttons,
            title_lines,
            message_lines,
        }
    }

    /// Whether the cell lies within the dialog (border included).
    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.dialog.contains(Position::new(col, row))
    }

    /// Index of the button under the cell, if any.
    pub fn button_at(&self, col: u16, row: u16) -> Option<usize> {
        let position = Position::new(col, row);
        self.buttons.iter().position(|rect| rect.contains(position))
    }
}

fn saturating_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn text_width(text: &str) -> u16 {
    saturating_u16(text.lines().map(|line| Span::raw(line).width()).max().unwrap_or(0))
}

fn button_width(title: &str) -> u16 {
    text_width(title).saturating_add(BUTTON_PADDING)
}

/// Total width of `count` buttons' gaps on a shared row.
fn gaps_width(count: usize) -> u16 {
    BUTTON_GAP.saturating_mul(saturating_u16(count.saturating_sub(1)))
}

fn dialog_width(title: &str, message: &str, buttons: &[&str], stacked: bool) -> u16 {
    let buttons_width = if stacked {
        buttons.iter().map(|t| button_width(t)).max().unwrap_or(0)
    } else {
        buttons
            .iter()
            .map(|t| button_width(t))
            .fold(0u16, u16::saturating_add)
            .saturating_add(gaps_width(buttons.len()))
    };
    let content = text_width(title)
        .max(text_width(message))
        .max(buttons_width);
    content
        .saturating_add(HORIZONTAL_CHROME)
        .clamp(MIN_ALERT_WIDTH, MAX_ALERT_WIDTH)
}

/// Center a `width` x `height` rect in `area`, then shift it sideways,
/// keeping it inside `area`.
fn place(area: Rect, width: u16, height: u16, offset: i16) -> Rect {
    let centered_x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let max_x = area.right() - width;
    let x = (i32::from(centered_x) + i32::from(offset)).clamp(i32::from(area.x), i32::from(max_x));
    Rect::new(x as u16, y, width, height)
}

fn inline_buttons(area: Rect, titles: &[&str]) -> Vec<Rect> {
    if titles.is_empty() || area.height == 0 {
        return Vec::new();
    }
    let widths: Vec<u16> = titles.iter().map(|t| button_width(t)).collect();
    let total = widths
        .iter()
        .fold(0u16, |acc, w| acc.saturating_add(*w))
        .saturating_add(gaps_width(widths.len()));
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    widths
        .into_iter()
        .map(|w| {
            let w = w.min(area.right().saturating_sub(x));
            let rect = Rect::new(x, area.y, w, 1);
            x = x.saturating_add(w).saturating_add(BUTTON_GAP).min(area.right());
            rect
        })
        .collect()
}

fn stacked_buttons(area: Rect, count: usize) -> Vec<Rect> {
    area.rows().take(count).collect()
}

/// Word-wrap `text` into lines at most `width` cells wide.
///
/// Widths are display cells, so wide characters count double. Explicit
/// newlines are kept; words longer than a line are split between characters.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };
            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                // A line always takes at least one character.
                if current_width + ch_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }
        lines.push(current);
    }
    lines
}

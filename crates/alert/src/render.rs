//! Alert rendering.
//!
//! Draws the backdrop over whatever the host already rendered, then the
//! dialog on top, and records the layout for mouse hit testing.

use std::time::Instant;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Gauge, Paragraph, Widget},
};
use tui_alert_config::Theme;

use crate::controller::AlertController;
use crate::layout::{AlertLayout, BodyLayout};
use crate::progress::percentage_label;
use crate::theme::ThemeExt;

/// Render a presented alert over the current frame.
///
/// Does nothing when the alert is not presented. In text-input mode the
/// terminal cursor is placed in the field.
///
/// # Arguments
///
/// * `f` - The frame to render to
/// * `alert` - The alert to draw; its layout is recorded for hit testing
/// * `theme` - The color theme to use
pub fn render_alert(f: &mut Frame, alert: &mut AlertController, theme: &Theme) {
    let area = f.area();
    if let Some(cursor) = render_alert_to_buffer(area, f.buffer_mut(), alert, theme, Instant::now())
    {
        f.set_cursor_position(cursor);
    }
}

/// Render into a buffer at a fixed instant. Returns the text cursor position,
/// if the alert has a text field with room for one.
pub fn render_alert_to_buffer(
    area: Rect,
    buf: &mut Buffer,
    alert: &mut AlertController,
    theme: &Theme,
    now: Instant,
) -> Option<Position> {
    if !alert.is_presented() || area.is_empty() {
        return None;
    }

    alert.backdrop().render(area, buf);

    let layout = AlertLayout::compute(area, alert, alert.shake_offset_at(now));
    Clear.render(layout.dialog, buf);
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .style(theme.surface())
        .render(layout.dialog, buf);

    render_lines(&layout.title_lines, layout.title, theme.title(), buf);
    render_lines(&layout.message_lines, layout.message, theme.message(), buf);
    let cursor = render_body(&layout.body, alert, theme, buf);
    render_buttons(&layout, alert, theme, buf);

    alert.set_last_layout(layout);
    cursor
}

fn render_lines(lines: &[String], area: Rect, style: Style, buf: &mut Buffer) {
    let lines: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();
    Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_label(text: String, area: Rect, theme: &Theme, buf: &mut Buffer) {
    Paragraph::new(text)
        .style(theme.text_dim())
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_gauge(ratio: f64, area: Rect, alert: &AlertController, theme: &Theme, buf: &mut Buffer) {
    Gauge::default()
        .gauge_style(theme.gauge(alert.progress_bar_color()))
        .ratio(ratio)
        .label("")
        .use_unicode(true)
        .render(area, buf);
}

fn render_body(
    body: &BodyLayout,
    alert: &AlertController,
    theme: &Theme,
    buf: &mut Buffer,
) -> Option<Position> {
    match *body {
        BodyLayout::None => None,
        BodyLayout::TextInput { field } => {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme.input_border())
                .style(theme.surface());
            let inner = block.inner(field);
            block.render(field, buf);
            if inner.is_empty() {
                return None;
            }

            let text_field = alert.text_field();
            let (line, cursor) = match text_field.placeholder() {
                Some(placeholder) if text_field.is_empty() => {
                    (Line::from(Span::styled(placeholder, theme.placeholder())), 0)
                }
                _ => {
                    let (shown, cursor) = text_field.visible(usize::from(inner.width));
                    (Line::from(Span::styled(shown, theme.surface())), cursor)
                }
            };
            Paragraph::new(line).render(inner, buf);
            Some(Position::new(
                inner.x + cursor.min(inner.width.saturating_sub(1)),
                inner.y,
            ))
        }
        BodyLayout::Progress { gauge, label } => {
            render_gauge(alert.percentage(), gauge, alert, theme, buf);
            render_label(percentage_label(alert.percentage()), label, theme, buf);
            None
        }
        BodyLayout::DuoProgress {
            status_gauge,
            status_label,
            gauge,
            label,
        } => {
            let status = alert.progress_status();
            render_gauge(status.fraction(), status_gauge, alert, theme, buf);
            render_label(status.to_string(), status_label, theme, buf);
            render_gauge(alert.percentage(), gauge, alert, theme, buf);
            render_label(percentage_label(alert.percentage()), label, theme, buf);
            None
        }
    }
}

fn render_buttons(layout: &AlertLayout, alert: &AlertController, theme: &Theme, buf: &mut Buffer) {
    let focused = alert.focused_index();
    for (index, (action, rect)) in alert.actions().iter().zip(&layout.buttons).enumerate() {
        let style = theme.button(action, focused == Some(index));
        Paragraph::new(Line::from(Span::styled(
            format!("[ {} ]", action.title()),
            style,
        )))
        .style(theme.surface())
        .alignment(Alignment::Center)
        .render(*rect, buf);
    }
}

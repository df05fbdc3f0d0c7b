//! Demo application state.
//!
//! Responsibilities:
//! - Build the alert for the selected mode and re-present it on demand.
//! - Route key and mouse events to the alert first, then to the host screen.
//! - Drive the simulated task shown by the progress modes.
//!
//! Does NOT handle:
//! - Terminal setup or the event loop (see `main.rs`).

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    text::Line,
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use tracing::{debug, info};
use tui_alert::{
    AlertAction, AlertActionStyle, AlertController, AlertEvent, AlertStyle, Appearance, ColorTheme,
    ProgressStatus, Theme, ThemeExt, render_alert,
};

use crate::cli::DemoMode;

/// Gauge advance per tick of the simulated task.
pub const PROGRESS_STEP: f64 = 0.02;
/// Steps of the simulated install in dual-progress mode.
pub const INSTALL_STEPS: u64 = 3;

/// Simulated background work feeding the progress gauges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulatedTask {
    pub step: u64,
    pub percent: f64,
}

/// The demo's host screen plus one alert.
pub struct DemoApp {
    mode: DemoMode,
    appearance: Appearance,
    color_theme: ColorTheme,
    theme: Theme,
    alert: AlertController,
    task: SimulatedTask,
    status: String,
    should_quit: bool,
}

impl DemoApp {
    /// Create the app and present the first alert.
    pub fn new(mode: DemoMode, appearance: Appearance) -> Self {
        let color_theme = appearance.theme;
        let mut app = Self {
            mode,
            appearance,
            color_theme,
            theme: Theme::from_color_theme(color_theme),
            alert: build_alert(mode, &appearance),
            task: SimulatedTask::default(),
            status: String::from("Ready"),
            should_quit: false,
        };
        app.present();
        app
    }

    pub fn alert(&self) -> &AlertController {
        &self.alert
    }

    pub fn task(&self) -> SimulatedTask {
        self.task
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn color_theme(&self) -> ColorTheme {
        self.color_theme
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Rebuild the alert from scratch and present it.
    pub fn present(&mut self) {
        self.alert = build_alert(self.mode, &self.appearance);
        self.task = SimulatedTask::default();
        if self.mode == DemoMode::DuoProgress {
            self.alert
                .set_progress_status(ProgressStatus::new(0, INSTALL_STEPS));
        }
        self.alert.present();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let event = self.alert.handle_key(key);
        if event.is_handled() {
            self.record(event);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.present();
                self.status = String::from("Alert presented");
            }
            KeyCode::Char('t') => {
                self.color_theme = self.color_theme.cycle_next();
                self.theme = Theme::from_color_theme(self.color_theme);
                info!(theme = %self.color_theme, "Theme changed");
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let event = self.alert.handle_mouse(mouse);
        self.record(event);
    }

    /// Advance animations and the simulated task.
    pub fn on_tick(&mut self, now: Instant) {
        self.alert.tick(now);
        if !self.alert.is_presented() || !self.alert.style().is_progress() {
            return;
        }

        self.task.percent = (self.task.percent + PROGRESS_STEP).min(1.0);
        if self.task.percent < 1.0 {
            self.alert.set_percentage(self.task.percent);
            return;
        }

        match self.alert.style() {
            AlertStyle::DuoProgress if self.task.step + 1 < INSTALL_STEPS => {
                self.task.step += 1;
                self.task.percent = 0.0;
                self.alert
                    .set_progress_status(ProgressStatus::new(self.task.step, INSTALL_STEPS));
                self.alert.set_percentage(0.0);
                debug!(step = self.task.step, "Simulated install step finished");
            }
            _ => {
                self.alert.set_percentage(1.0);
                self.alert.dismiss();
                self.status = String::from("Task complete");
                info!(mode = ?self.mode, "Simulated task complete");
            }
        }
    }

    fn record(&mut self, event: AlertEvent) {
        match event {
            AlertEvent::ActionFired { index, .. } => {
                let title = self
                    .alert
                    .actions()
                    .get(index)
                    .map(|a| a.title().to_string())
                    .unwrap_or_default();
                self.status = if self.alert.is_presented() {
                    format!("'{title}' rejected")
                } else {
                    format!("'{title}' pressed")
                };
            }
            AlertEvent::Dismissed => self.status = String::from("Dismissed from background"),
            AlertEvent::Ignored | AlertEvent::Consumed => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let lines = vec![
            Line::from(format!("Mode: {:?}", self.mode)),
            Line::from(format!("Theme: {}", self.color_theme)),
            Line::from(format!("Last: {}", self.status)),
            Line::from(""),
            Line::from("Enter: show alert   t: cycle theme   q: quit"),
        ];
        let host = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(" tui-alert demo ")
                    .border_style(self.theme.border()),
            )
            .style(self.theme.surface())
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        f.render_widget(host, f.area());

        render_alert(f, &mut self.alert, &self.theme);
    }
}

/// Build the sample alert for `mode`.
pub fn build_alert(mode: DemoMode, appearance: &Appearance) -> AlertController {
    let (title, message) = match mode {
        DemoMode::Normal => ("Delete file?", "\"report.pdf\" will be removed. This cannot be undone."),
        DemoMode::TextInput => ("Login", "Enter the password for admin."),
        DemoMode::Progress => ("Downloading", "Fetching the latest release."),
        DemoMode::DuoProgress => ("Installing", "Unpacking and configuring components."),
    };
    let mut alert =
        AlertController::new(title, message, AlertStyle::from(mode)).with_appearance(appearance);

    match mode {
        DemoMode::Normal => {
            alert.add_action(AlertAction::without_handler("Cancel", AlertActionStyle::Cancel));
            alert.add_action(AlertAction::with_handler(
                "Delete",
                AlertActionStyle::Destructive,
                |alert, action| {
                    info!(action = %action.title(), "Deleting file");
                    alert.dismiss();
                },
            ));
        }
        DemoMode::TextInput => {
            alert.set_placeholder("Password");
            alert.text_field_mut().set_secure(true);
            alert.add_action(AlertAction::without_handler("Cancel", AlertActionStyle::Cancel));
            alert.add_action(AlertAction::with_handler(
                "Login",
                AlertActionStyle::Default,
                |alert, _| {
                    if alert.text().is_empty() {
                        alert.shake_alert_view();
                    } else {
                        alert.dismiss();
                    }
                },
            ));
        }
        DemoMode::Progress | DemoMode::DuoProgress => {
            alert.add_action(AlertAction::without_handler("Hide", AlertActionStyle::Cancel));
        }
    }
    alert
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(mode: DemoMode) -> DemoApp {
        DemoApp::new(mode, Appearance::default())
    }

    #[test]
    fn test_starts_with_alert_presented() {
        let app = app(DemoMode::Normal);
        assert!(app.alert().is_presented());
        assert_eq!(app.alert().actions()[0].title(), "Cancel");
        assert_eq!(app.alert().actions()[1].title(), "Delete");
    }

    #[test]
    fn test_q_only_quits_once_alert_is_gone() {
        let mut app = app(DemoMode::Normal);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit());

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.alert().is_presented());
        assert_eq!(app.status(), "'Cancel' pressed");

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = app(DemoMode::Normal);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_enter_represents_alert() {
        let mut app = app(DemoMode::Normal);
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.alert().is_presented());
    }

    #[test]
    fn test_empty_login_is_rejected() {
        let mut app = app(DemoMode::TextInput);
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.alert().is_presented());
        assert_eq!(app.alert().shake().trigger_count(), 1);
        assert_eq!(app.status(), "'Login' rejected");

        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.alert().is_presented());
        assert_eq!(app.status(), "'Login' pressed");
    }

    #[test]
    fn test_progress_completes_and_dismisses() {
        let mut app = app(DemoMode::Progress);
        let start = Instant::now();
        for i in 0..10 {
            app.on_tick(start + Duration::from_millis(i * 33));
        }
        assert!(app.alert().percentage() > 0.0);
        for i in 10..100 {
            app.on_tick(start + Duration::from_millis(i * 33));
        }
        assert!(!app.alert().is_presented());
        assert_eq!(app.status(), "Task complete");
    }

    #[test]
    fn test_duo_progress_advances_steps() {
        let mut app = app(DemoMode::DuoProgress);
        assert_eq!(app.alert().progress_status(), ProgressStatus::new(0, INSTALL_STEPS));
        let now = Instant::now();
        for _ in 0..60 {
            app.on_tick(now);
        }
        assert_eq!(app.task().step, 1);
        assert_eq!(app.alert().progress_status(), ProgressStatus::new(1, INSTALL_STEPS));
        assert!(app.alert().is_presented());

        for _ in 0..200 {
            app.on_tick(now);
        }
        assert!(!app.alert().is_presented());
    }

    #[test]
    fn test_theme_cycles_when_alert_hidden() {
        let mut app = app(DemoMode::Normal);
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.color_theme(), ColorTheme::Light);
    }

    #[test]
    fn test_background_click_is_recorded() {
        use crossterm::event::{MouseButton, MouseEventKind};
        use ratatui::{Terminal, backend::TestBackend};

        let mut app = app(DemoMode::Normal);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
        terminal.draw(|f| app.render(f)).expect("draw");

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!app.alert().is_presented());
        assert_eq!(app.status(), "Dismissed from background");
    }
}

//! Modal alert dialogs for ratatui applications.
//!
//! An [`AlertController`] holds a title, a message, and ordered
//! [`AlertAction`] buttons, in one of four styles: plain, with a text field,
//! with a progress gauge, or with a status gauge above a progress gauge.
//! The host feeds it key and mouse events and calls [`render_alert`] after
//! drawing its own UI.
//!
//! # Example
//!
//! ```rust
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use tui_alert::{AlertAction, AlertActionStyle, AlertController, AlertEvent, AlertStyle};
//!
//! let mut alert = AlertController::new("Upload", "Sending files...", AlertStyle::Progress);
//! alert.add_action(AlertAction::without_handler("Cancel", AlertActionStyle::Cancel));
//! alert.present();
//! alert.set_percentage(1.5);
//! assert_eq!(alert.percentage(), 1.0);
//!
//! let event = alert.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
//! assert!(matches!(event, AlertEvent::ActionFired { index: 0, .. }));
//! assert!(!alert.is_presented());
//! ```

pub mod action;
pub mod backdrop;
pub mod controller;
pub mod layout;
pub mod progress;
pub mod render;
pub mod shake;
pub mod text_field;
pub mod theme;

pub use action::{ActionHandler, AlertAction, AlertActionStyle};
pub use backdrop::{Backdrop, BackgroundColor};
pub use controller::{AlertController, AlertEvent, AlertStyle};
pub use layout::{AlertLayout, BodyLayout};
pub use progress::{ProgressStatus, clamp_percentage, percentage_label};
pub use render::{render_alert, render_alert_to_buffer};
pub use shake::ShakeAnimation;
pub use text_field::TextField;
pub use theme::ThemeExt;
pub use tui_alert_config::{Appearance, BlurStyle, ColorTheme, ShakeConfig, Theme};

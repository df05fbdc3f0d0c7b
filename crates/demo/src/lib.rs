//! Interactive demo of `tui-alert` dialogs.
//!
//! The binary presents one alert over a small host screen and drives the
//! simulated task behind the progress modes.

pub mod app;
pub mod cli;
pub mod terminal;

pub use app::DemoApp;
pub use cli::{Cli, DemoMode};

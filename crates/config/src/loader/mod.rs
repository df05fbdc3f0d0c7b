//! Appearance loader for environment variables and files.
//!
//! Responsibilities:
//! - Load appearance settings from `.env` files, environment variables, and `appearance.json`.
//! - Provide a builder-pattern `AppearanceLoader` for layered merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Writing configuration back to disk.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use builder::{AppearanceLoader, parse_color};
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use file::{default_config_path, read_appearance_file};

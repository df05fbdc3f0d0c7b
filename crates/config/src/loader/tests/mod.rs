//! Tests for the appearance loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod file_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, cleared so host settings cannot leak in.
pub const ALL_ALERT_VARS: [&str; 8] = [
    "ALERT_THEME",
    "ALERT_TAP_DISMISS",
    "ALERT_USE_BLUR",
    "ALERT_BLUR_STYLE",
    "ALERT_BACKGROUND_COLOR",
    "ALERT_BACKGROUND_ALPHA",
    "ALERT_PROGRESS_COLOR",
    "ALERT_CONFIG_PATH",
];

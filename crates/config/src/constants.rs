//! Centralized constants for the tui-alert workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Backdrop Defaults
// =============================================================================

/// Default flat backdrop color name (parsed with ratatui's `Color::from_str`).
pub const DEFAULT_BACKGROUND_COLOR: &str = "black";

/// Default flat backdrop alpha (black with 40% alpha).
pub const DEFAULT_BACKGROUND_ALPHA: f32 = 0.4;

/// Default progress bar tint (the classic system blue).
pub const DEFAULT_PROGRESS_BAR_COLOR: &str = "blue";

// =============================================================================
// Shake Animation Defaults
// =============================================================================

/// Total duration of one shake in milliseconds.
pub const DEFAULT_SHAKE_DURATION_MS: u64 = 500;

/// Peak horizontal displacement of the dialog in cells.
pub const DEFAULT_SHAKE_AMPLITUDE: u16 = 3;

/// Number of full left/right swings in one shake.
pub const DEFAULT_SHAKE_OSCILLATIONS: u16 = 4;

/// Upper bound accepted for the shake amplitude.
pub const MAX_SHAKE_AMPLITUDE: u16 = 20;

// =============================================================================
// Layout Defaults
// =============================================================================

/// Narrowest dialog the layout will produce (when the frame allows it).
pub const MIN_ALERT_WIDTH: u16 = 30;

/// Widest dialog the layout will produce.
pub const MAX_ALERT_WIDTH: u16 = 60;

// =============================================================================
// Runtime Defaults
// =============================================================================

/// Default UI tick interval for animations in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 33;

/// File name of the persisted appearance configuration.
pub const APPEARANCE_FILE_NAME: &str = "appearance.json";

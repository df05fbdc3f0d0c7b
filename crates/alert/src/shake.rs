//! Shake animation for rejected input.
//!
//! A damped horizontal oscillation of the dialog, similar to the password
//! error shake of desktop login windows. The animation is driven by the
//! host's tick loop; nothing here sleeps or spawns.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use tui_alert::ShakeAnimation;
//!
//! let mut shake = ShakeAnimation::default();
//! let start = Instant::now();
//! shake.trigger_at(start);
//! assert!(shake.is_active_at(start + Duration::from_millis(100)));
//! assert!(!shake.tick(start + Duration::from_secs(5)));
//! ```

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use tui_alert_config::ShakeConfig;

/// Controls shake state and the resulting horizontal offset.
#[derive(Debug, Clone)]
pub struct ShakeAnimation {
    started_at: Option<Instant>,
    duration: Duration,
    amplitude: u16,
    oscillations: u16,
    trigger_count: u64,
}

impl Default for ShakeAnimation {
    fn default() -> Self {
        Self::new(ShakeConfig::default())
    }
}

impl ShakeAnimation {
    /// Create an idle shake animation.
    pub fn new(config: ShakeConfig) -> Self {
        Self {
            started_at: None,
            duration: Duration::from_millis(config.duration_ms.max(1)),
            amplitude: config.amplitude,
            oscillations: config.oscillations,
            trigger_count: 0,
        }
    }

    /// Apply new tuning. A running shake keeps its start time.
    pub fn configure(&mut self, config: ShakeConfig) {
        self.duration = Duration::from_millis(config.duration_ms.max(1));
        self.amplitude = config.amplitude;
        self.oscillations = config.oscillations;
    }

    /// Start (or restart) the shake now.
    pub fn trigger(&mut self) {
        self.trigger_at(Instant::now());
    }

    /// Start (or restart) the shake at `now`. Every call counts, even while running.
    pub fn trigger_at(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.trigger_count += 1;
    }

    /// Stop immediately and return to rest.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// How many times the shake has been triggered.
    pub fn trigger_count(&self) -> u64 {
        self.trigger_count
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Progress in `[0.0, 1.0]`, or `None` when idle.
    pub fn progress_at(&self, now: Instant) -> Option<f32> {
        let started_at = self.started_at?;
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            Some(1.0)
        } else {
            Some(elapsed.as_secs_f32() / self.duration.as_secs_f32())
        }
    }

    pub fn is_active_at(&self, now: Instant) -> bool {
        matches!(self.progress_at(now), Some(p) if p < 1.0)
    }

    /// Horizontal offset in cells at `now`; zero when idle or finished.
    pub fn offset_at(&self, now: Instant) -> i16 {
        match self.progress_at(now) {
            Some(progress) if progress < 1.0 => {
                let damping = 1.0 - progress;
                let phase = TAU * f32::from(self.oscillations) * progress;
                (f32::from(self.amplitude) * damping * phase.sin()).round() as i16
            }
            _ => 0,
        }
    }

    /// Advance the animation for one frame.
    /// Returns true if the shake is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_active_at(now) {
            return true;
        }
        self.started_at = None;
        false
    }
}

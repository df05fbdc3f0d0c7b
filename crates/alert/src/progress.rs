//! Progress values shown by progress-style alerts.
//!
//! Invariants:
//! - Every value handed to a gauge is within `[0.0, 1.0]`.
//! - NaN percentages pin to `0.0`.

use std::fmt;

/// Pin a percentage to `[0.0, 1.0]`.
pub fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Text shown under the solo/lower gauge, e.g. `"42%"`.
pub fn percentage_label(percentage: f64) -> String {
    format!("{}%", (clamp_percentage(percentage) * 100.0).round() as u32)
}

/// Status of the upper gauge in dual-progress alerts: `current` of `total` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProgressStatus {
    pub current: u64,
    pub total: u64,
}

impl ProgressStatus {
    pub const fn new(current: u64, total: u64) -> Self {
        Self { current, total }
    }

    /// Completed fraction, pinned to `[0.0, 1.0]`; zero when `total` is zero.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        clamp_percentage(self.current as f64 / self.total as f64)
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.current >= self.total
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_percentage() {
        assert_eq!(clamp_percentage(-0.5), 0.0);
        assert_eq!(clamp_percentage(0.25), 0.25);
        assert_eq!(clamp_percentage(7.0), 1.0);
        assert_eq!(clamp_percentage(f64::NAN), 0.0);
        assert_eq!(clamp_percentage(f64::INFINITY), 1.0);
        assert_eq!(clamp_percentage(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_percentage_label() {
        assert_eq!(percentage_label(0.0), "0%");
        assert_eq!(percentage_label(0.42), "42%");
        assert_eq!(percentage_label(1.0), "100%");
        assert_eq!(percentage_label(3.0), "100%");
    }

    #[test]
    fn test_status_fraction() {
        assert_eq!(ProgressStatus::new(1, 4).fraction(), 0.25);
        assert_eq!(ProgressStatus::new(0, 0).fraction(), 0.0);
        assert_eq!(ProgressStatus::new(9, 3).fraction(), 1.0);
    }

    #[test]
    fn test_status_display_and_completion() {
        let status = ProgressStatus::new(2, 5);
        assert_eq!(status.to_string(), "2/5");
        assert!(!status.is_complete());
        assert!(ProgressStatus::new(5, 5).is_complete());
        assert!(!ProgressStatus::default().is_complete());
    }
}

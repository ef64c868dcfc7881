//! Frame pacing configuration types.

use serde::{Deserialize, Serialize};

/// Performance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Target frames per second for hosts that pace frames themselves.
    pub frame_rate: u32,
    /// Rolling window used for FPS reporting.
    pub timing_samples: u32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            timing_samples: 120,
        }
    }
}

impl PerformanceConfig {
    /// Seconds per frame at the target rate.
    pub fn frame_interval(&self) -> f64 {
        1.0 / f64::from(self.frame_rate.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_interval_at_60fps() {
        let config = PerformanceConfig::default();
        assert!((config.frame_interval() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn frame_interval_guards_zero_rate() {
        let config = PerformanceConfig {
            frame_rate: 0,
            ..Default::default()
        };
        assert!((config.frame_interval() - 1.0).abs() < 1e-12);
    }
}

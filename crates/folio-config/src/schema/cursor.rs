//! Custom cursor and tween curve configuration types.

use serde::{Deserialize, Serialize};

/// Easing curve names, spelled the way animation libraries spell them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EaseCurve {
    #[serde(rename = "linear")]
    Linear,
    #[default]
    #[serde(rename = "power2.out")]
    Power2Out,
    #[serde(rename = "power3.out")]
    Power3Out,
    #[serde(rename = "power2.inOut")]
    Power2InOut,
}

/// Two-layer cursor settings: a lagging ring and an instant dot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub enabled: bool,
    /// Seconds the ring takes to reach the pointer.
    pub ring_duration: f64,
    pub ring_ease: EaseCurve,
    /// Seconds the dot takes to reach the pointer (0 = instant).
    pub dot_duration: f64,
    /// Fraction of the pointer's offset from a magnetic button's center
    /// applied to the button (valid range: 0.0-1.0).
    pub magnetic_strength: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ring_duration: 0.15,
            ring_ease: EaseCurve::Power2Out,
            dot_duration: 0.0,
            magnetic_strength: 0.3,
        }
    }
}

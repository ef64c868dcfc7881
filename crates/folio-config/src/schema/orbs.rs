//! Glow orb configuration types.

use serde::{Deserialize, Serialize};

/// A single cursor-following glow orb.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbConfig {
    pub color: String,
    /// Fraction of the remaining distance covered per tick (valid range: 0.001-1.0).
    pub rate: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            color: "#a855f7".into(),
            rate: 0.03,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl OrbConfig {
    pub fn purple() -> Self {
        Self::default()
    }

    pub fn pink() -> Self {
        Self {
            color: "#ec4899".into(),
            rate: 0.02,
            offset_x: 100.0,
            offset_y: -50.0,
        }
    }

    pub fn cyan() -> Self {
        Self {
            color: "#06b6d4".into(),
            rate: 0.015,
            offset_x: -80.0,
            offset_y: 80.0,
        }
    }
}

/// Glow orb layer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbsConfig {
    pub enabled: bool,
    /// Rendered orb diameter in pixels. Orbs are centered on their point.
    pub size: f64,
    pub orbs: Vec<OrbConfig>,
}

impl Default for OrbsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: 400.0,
            orbs: vec![OrbConfig::purple(), OrbConfig::pink(), OrbConfig::cyan()],
        }
    }
}

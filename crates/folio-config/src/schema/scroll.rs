//! Scroll-driven effect configuration types.

use serde::{Deserialize, Serialize};

use super::cursor::EaseCurve;

/// Scroll progress, active section and reveal trigger settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Fraction of the viewport height where reveal triggers fire
    /// (0.9 = element top reaches 90% of the viewport).
    pub reveal_start: f64,
    /// A section becomes active this many pixels before its top is reached.
    pub active_section_offset: f64,
    pub skill_duration: f64,
    pub skill_ease: EaseCurve,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            reveal_start: 0.9,
            active_section_offset: 200.0,
            skill_duration: 1.5,
            skill_ease: EaseCurve::Power3Out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_config_defaults() {
        let config = ScrollConfig::default();
        assert!((config.reveal_start - 0.9).abs() < f64::EPSILON);
        assert!((config.active_section_offset - 200.0).abs() < f64::EPSILON);
        assert_eq!(config.skill_ease, EaseCurve::Power3Out);
    }
}

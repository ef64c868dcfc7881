//! Particle background configuration types.

use serde::{Deserialize, Serialize};

/// Particle field settings.
///
/// Randomized attributes are drawn as `base + rand * variance`. Hue is in
/// degrees; saturation and lightness are fractions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub enabled: bool,
    /// Number of particles created at startup (valid range: 1-2000).
    pub count: u32,
    /// Velocity components are drawn from `(rand - 0.5) * speed`.
    pub speed: f64,
    pub size_base: f64,
    pub size_variance: f64,
    pub alpha_base: f64,
    pub alpha_variance: f64,
    pub hue_base: f64,
    pub hue_span: f64,
    pub saturation: f64,
    pub lightness: f64,
    /// Fixed RNG seed. A fresh seed is drawn per session when unset.
    pub seed: Option<u64>,
    pub repulsion: RepulsionConfig,
    pub links: LinkConfig,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 150,
            speed: 0.4,
            size_base: 0.1,
            size_variance: 2.3,
            alpha_base: 0.4,
            alpha_variance: 0.6,
            hue_base: 260.0,
            hue_span: 60.0,
            saturation: 0.8,
            lightness: 0.7,
            seed: None,
            repulsion: RepulsionConfig::default(),
            links: LinkConfig::default(),
        }
    }
}

/// Pointer repulsion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepulsionConfig {
    pub enabled: bool,
    /// Distance below which the pointer pushes particles away.
    pub radius: f64,
    /// Positional nudge scale applied per tick.
    pub strength: f64,
}

impl Default for RepulsionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: 150.0,
            strength: 0.02,
        }
    }
}

/// Connective line settings for particle pairs and the pointer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Line color as hex string.
    pub color: String,
    /// Particle-particle link distance (exclusive).
    pub radius: f64,
    /// Opacity at zero distance.
    pub opacity: f64,
    /// Opacity lost between zero distance and `radius`.
    pub falloff: f64,
    pub width: f64,
    /// Particle-pointer link distance (exclusive).
    pub pointer_radius: f64,
    /// Pointer link opacity at zero distance; fades to zero at `pointer_radius`.
    pub pointer_opacity: f64,
    pub pointer_width: f64,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            color: "#a78bfa".into(),
            radius: 100.0,
            opacity: 0.35,
            falloff: 0.1,
            width: 0.5,
            pointer_radius: 120.0,
            pointer_opacity: 0.3,
            pointer_width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_config_defaults() {
        let config = ParticleConfig::default();
        assert!(config.enabled);
        assert_eq!(config.count, 150);
        assert!((config.speed - 0.4).abs() < f64::EPSILON);
        assert!((config.size_variance - 2.3).abs() < f64::EPSILON);
        assert!((config.hue_base - 260.0).abs() < f64::EPSILON);
        assert!(config.seed.is_none());
        assert!((config.repulsion.radius - 150.0).abs() < f64::EPSILON);
        assert!((config.repulsion.strength - 0.02).abs() < f64::EPSILON);
        assert!((config.links.radius - 100.0).abs() < f64::EPSILON);
        assert!((config.links.pointer_radius - 120.0).abs() < f64::EPSILON);
        assert_eq!(config.links.color, "#a78bfa");
    }

    #[test]
    fn particle_config_partial_toml() {
        let toml_str = r#"
count = 60
seed = 7

[links]
radius = 80.0
"#;
        let config: ParticleConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.count, 60);
        assert_eq!(config.seed, Some(7));
        assert!((config.links.radius - 80.0).abs() < f64::EPSILON);
        // Defaults preserved
        assert!((config.links.opacity - 0.35).abs() < f64::EPSILON);
        assert!(config.repulsion.enabled);
    }

    #[test]
    fn repulsion_can_be_disabled() {
        let config: RepulsionConfig = toml::from_str("enabled = false").unwrap();
        assert!(!config.enabled);
        assert!((config.radius - 150.0).abs() < f64::EPSILON);
    }
}

use folio_common::{Color, Point};
use folio_config::schema::{LinkConfig, RepulsionConfig};

use crate::surface::Stroke;

/// Pointer repulsion applied directly to particle positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repulsion {
    pub radius: f32,
    pub strength: f32,
}

impl Repulsion {
    /// `None` when repulsion is switched off.
    pub fn from_config(config: &RepulsionConfig) -> Option<Self> {
        config.enabled.then(|| Self {
            radius: config.radius as f32,
            strength: config.strength as f32,
        })
    }

    /// Linear force coefficient: 1 at the pointer, 0 at and beyond `radius`.
    pub fn force(&self, distance: f32) -> f32 {
        if distance < self.radius {
            (self.radius - distance) / self.radius
        } else {
            0.0
        }
    }

    /// Positional nudge for a particle at `particle`, `distance` away from `pointer`.
    pub fn displacement(&self, particle: Point, pointer: Point, distance: f32) -> (f32, f32) {
        let force = self.force(distance);
        if force == 0.0 {
            return (0.0, 0.0);
        }
        let dx = pointer.x - particle.x;
        let dy = pointer.y - particle.y;
        (-dx * force * self.strength, -dy * force * self.strength)
    }
}

impl Default for Repulsion {
    fn default() -> Self {
        Self {
            radius: 150.0,
            strength: 0.02,
        }
    }
}

/// Styling and thresholds for connective lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkStyle {
    pub color: Color,
    pub radius: f32,
    pub opacity: f32,
    pub falloff: f32,
    pub width: f32,
    pub pointer_radius: f32,
    pub pointer_opacity: f32,
    pub pointer_width: f32,
}

impl LinkStyle {
    pub fn from_config(config: &LinkConfig) -> Self {
        Self {
            color: Color::from_hex(&config.color).unwrap_or(DEFAULT_LINK_COLOR),
            radius: config.radius as f32,
            opacity: config.opacity as f32,
            falloff: config.falloff as f32,
            width: config.width as f32,
            pointer_radius: config.pointer_radius as f32,
            pointer_opacity: config.pointer_opacity as f32,
            pointer_width: config.pointer_width as f32,
        }
    }

    /// Stroke for a particle pair `distance` apart, if they are close enough.
    pub fn pair_stroke(&self, distance: f32) -> Option<Stroke> {
        (distance < self.radius).then(|| Stroke {
            color: self.color,
            alpha: (self.opacity - distance / self.radius * self.falloff).clamp(0.0, 1.0),
            width: self.width,
        })
    }

    /// Stroke for a particle-to-pointer link, fading to zero at `pointer_radius`.
    pub fn pointer_stroke(&self, distance: f32) -> Option<Stroke> {
        (distance < self.pointer_radius).then(|| Stroke {
            color: self.color,
            alpha: (self.pointer_opacity - distance / self.pointer_radius * self.pointer_opacity)
                .clamp(0.0, 1.0),
            width: self.pointer_width,
        })
    }
}

impl Default for LinkStyle {
    fn default() -> Self {
        Self::from_config(&LinkConfig::default())
    }
}

const DEFAULT_LINK_COLOR: Color = Color::from_rgb(167, 139, 250);

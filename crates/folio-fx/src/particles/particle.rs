use folio_common::{Color, Point, Viewport};
use folio_config::schema::ParticleConfig;
use rand::Rng;

/// Ranges particles are randomized from at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnParams {
    pub speed: f32,
    pub size_base: f32,
    pub size_variance: f32,
    pub alpha_base: f32,
    pub alpha_variance: f32,
    pub hue_base: f32,
    pub hue_span: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl SpawnParams {
    pub fn from_config(config: &ParticleConfig) -> Self {
        Self {
            speed: config.speed as f32,
            size_base: config.size_base as f32,
            size_variance: config.size_variance as f32,
            alpha_base: config.alpha_base as f32,
            alpha_variance: config.alpha_variance as f32,
            hue_base: config.hue_base as f32,
            hue_span: config.hue_span as f32,
            saturation: config.saturation as f32,
            lightness: config.lightness as f32,
        }
    }
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self::from_config(&ParticleConfig::default())
    }
}

/// A single background particle. Only the position changes after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub alpha: f32,
    pub color: Color,
}

impl Particle {
    /// Randomize a particle somewhere inside `bounds`.
    pub fn spawn<R: Rng + ?Sized>(bounds: Viewport, params: &SpawnParams, rng: &mut R) -> Self {
        let x = rng.gen::<f32>() * bounds.width;
        let y = rng.gen::<f32>() * bounds.height;
        let vx = (rng.gen::<f32>() - 0.5) * params.speed;
        let vy = (rng.gen::<f32>() - 0.5) * params.speed;
        let size = rng.gen::<f32>() * params.size_variance + params.size_base;
        let alpha = rng.gen::<f32>() * params.alpha_variance + params.alpha_base;
        let hue = params.hue_base + rng.gen::<f32>() * params.hue_span;

        Self {
            // gen::<f32>() * extent can round up to extent itself
            x: wrap_axis(x, bounds.width),
            y: wrap_axis(y, bounds.height),
            vx,
            vy,
            size,
            alpha,
            color: Color::from_hsl(hue, params.saturation, params.lightness),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Advance one tick and wrap each axis back into `bounds`.
    pub fn update(&mut self, bounds: Viewport) {
        self.x = wrap_axis(self.x + self.vx, bounds.width);
        self.y = wrap_axis(self.y + self.vy, bounds.height);
    }

    pub(crate) fn nudge(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

/// Reset a coordinate that left `[0, extent)` to the opposite edge.
pub fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        last_below(extent)
    } else if value >= extent {
        0.0
    } else {
        value
    }
}

/// The edge-most value still inside `[0, extent)`, within two ulps of `extent`.
fn last_below(extent: f32) -> f32 {
    let below = extent - extent * f32::EPSILON;
    if below < extent {
        below.max(0.0)
    } else {
        0.0
    }
}

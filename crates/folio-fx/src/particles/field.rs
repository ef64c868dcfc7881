use folio_common::{Point, Viewport};
use folio_config::schema::ParticleConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::links::{LinkStyle, Repulsion};
use super::particle::{Particle, SpawnParams};
use crate::surface::{Fill, Surface};

/// Fixed-size particle collection with pointer repulsion and proximity links.
///
/// The collection never grows or shrinks after construction; particles that
/// leave the viewport are wrapped back in place.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Viewport,
    repulsion: Option<Repulsion>,
    links: LinkStyle,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        count: usize,
        bounds: Viewport,
        spawn: &SpawnParams,
        repulsion: Option<Repulsion>,
        links: LinkStyle,
        rng: &mut R,
    ) -> Self {
        let particles = (0..count)
            .map(|_| Particle::spawn(bounds, spawn, rng))
            .collect();
        Self {
            particles,
            bounds,
            repulsion,
            links,
        }
    }

    /// Build from config, seeding the RNG from `config.seed` when set.
    pub fn from_config(config: &ParticleConfig, bounds: Viewport) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(
            count = config.count,
            seed = ?config.seed,
            "spawning particle field"
        );
        Self::new(
            config.count as usize,
            bounds,
            &SpawnParams::from_config(config),
            Repulsion::from_config(&config.repulsion),
            LinkStyle::from_config(&config.links),
            &mut rng,
        )
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    /// Change the wrap bounds. Existing positions are left untouched.
    pub fn set_bounds(&mut self, bounds: Viewport) {
        self.bounds = bounds;
    }

    pub fn link_style(&self) -> &LinkStyle {
        &self.links
    }

    pub fn repulsion(&self) -> Option<&Repulsion> {
        self.repulsion.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Run one tick: move, repel and draw every particle plus its links.
    ///
    /// Each particle is updated and drawn before the next one moves, so pair
    /// links from particle `i` go to where later particles were last tick.
    /// Without a surface the kinematics still advance.
    pub fn frame<S: Surface + ?Sized>(&mut self, pointer: Option<Point>, mut surface: Option<&mut S>) {
        if let Some(s) = surface.as_deref_mut() {
            s.clear();
        }

        let bounds = self.bounds;
        let count = self.particles.len();

        for i in 0..count {
            self.particles[i].update(bounds);

            if let Some(s) = surface.as_deref_mut() {
                let p = &self.particles[i];
                s.fill_circle(
                    p.position(),
                    p.size,
                    Fill {
                        color: p.color,
                        alpha: p.alpha,
                    },
                );
            }

            if let Some(pointer) = pointer {
                let distance = self.particles[i].position().distance_to(pointer);

                if let Some(repulsion) = self.repulsion {
                    let (dx, dy) =
                        repulsion.displacement(self.particles[i].position(), pointer, distance);
                    self.particles[i].nudge(dx, dy);
                }

                if let (Some(s), Some(stroke)) =
                    (surface.as_deref_mut(), self.links.pointer_stroke(distance))
                {
                    s.stroke_line(self.particles[i].position(), pointer, stroke);
                }
            }

            let Some(s) = surface.as_deref_mut() else {
                continue;
            };
            let from = self.particles[i].position();
            for other in &self.particles[i + 1..] {
                let to = other.position();
                if let Some(stroke) = self.links.pair_stroke(from.distance_to(to)) {
                    s.stroke_line(from, to, stroke);
                }
            }
        }
    }
}

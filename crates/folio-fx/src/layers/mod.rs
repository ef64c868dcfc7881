//! The scene's three frame-driven layers.
//!
//! Each layer owns its state plus an optional host binding. A missing
//! binding turns rendering into a no-op while the state keeps advancing.

use folio_common::Viewport;
use tracing::{debug, warn};

use crate::cursor::{Cursor, MagneticButtons};
use crate::frame::{Animation, FrameInput};
use crate::orbs::{OrbFollower, OrbStage};
use crate::particles::ParticleField;
use crate::scroll::ScrollEffects;
use crate::surface::Surface;

/// Particle field bound to a drawing surface.
pub struct ParticleLayer<S> {
    field: ParticleField,
    surface: Option<S>,
}

impl<S: Surface> ParticleLayer<S> {
    pub fn new(field: ParticleField, surface: Option<S>) -> Self {
        if surface.is_none() {
            warn!("no drawing surface; particle field runs without rendering");
        }
        Self { field, surface }
    }

    /// Match the surface and wrap bounds to `viewport`.
    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_size(viewport.width, viewport.height);
        }
        self.field.set_bounds(viewport);
        debug!(
            width = viewport.width,
            height = viewport.height,
            "particle layer resized"
        );
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }
}

impl<S: Surface> Animation for ParticleLayer<S> {
    fn tick(&mut self, input: &FrameInput) {
        self.field
            .frame(input.pointer.position(), self.surface.as_mut());
    }
}

/// Orb follower bound to the host's orb elements.
pub struct OrbLayer<T> {
    follower: OrbFollower,
    stage: Option<T>,
}

impl<T: OrbStage> OrbLayer<T> {
    pub fn new(follower: OrbFollower, stage: Option<T>) -> Self {
        match &stage {
            None => warn!("no orb elements; orb easing runs without output"),
            Some(s) if s.len() < follower.len() => warn!(
                present = s.len(),
                expected = follower.len(),
                "fewer orb elements than configured orbs"
            ),
            Some(_) => {}
        }
        Self { follower, stage }
    }

    pub fn follower(&self) -> &OrbFollower {
        &self.follower
    }

    pub fn follower_mut(&mut self) -> &mut OrbFollower {
        &mut self.follower
    }

    pub fn stage(&self) -> Option<&T> {
        self.stage.as_ref()
    }
}

impl<T: OrbStage> Animation for OrbLayer<T> {
    fn tick(&mut self, _input: &FrameInput) {
        self.follower.tick();
        if let Some(stage) = self.stage.as_mut() {
            self.follower.apply(stage);
        }
    }
}

/// Event-driven tweens: the cursor layers and scroll animations.
#[derive(Debug, Clone)]
pub struct TweenLayer {
    pub cursor: Option<Cursor>,
    pub magnetic: MagneticButtons,
    pub scroll: ScrollEffects,
}

impl Animation for TweenLayer {
    fn tick(&mut self, input: &FrameInput) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.advance(input.dt);
        }
        self.scroll.advance(input.dt);
    }
}

#[cfg(test)]
mod tests {
    use folio_common::Point;
    use folio_config::schema::{OrbsConfig, ParticleConfig, ScrollConfig};

    use super::*;
    use crate::pointer::PointerState;
    use crate::surface::RecordingSurface;

    fn field() -> ParticleField {
        let config = ParticleConfig {
            seed: Some(21),
            count: 20,
            ..Default::default()
        };
        ParticleField::from_config(&config, Viewport::new(800.0, 600.0))
    }

    #[test]
    fn resize_updates_surface_and_bounds() {
        let mut layer = ParticleLayer::new(field(), Some(RecordingSurface::new()));
        layer.resize(Viewport::new(1200.0, 900.0));
        let surface = layer.surface().unwrap();
        assert_eq!(surface.size(), (1200.0, 900.0));
        assert_eq!(surface.resize_count(), 1);
        assert_eq!(layer.field().bounds(), Viewport::new(1200.0, 900.0));
    }

    #[test]
    fn resize_without_surface_updates_bounds() {
        let mut layer: ParticleLayer<RecordingSurface> = ParticleLayer::new(field(), None);
        layer.resize(Viewport::new(300.0, 200.0));
        assert_eq!(layer.field().bounds(), Viewport::new(300.0, 200.0));
    }

    #[test]
    fn particle_tick_draws_with_pointer() {
        let mut layer = ParticleLayer::new(field(), Some(RecordingSurface::new()));
        let mut pointer = PointerState::new();
        pointer.moved_to(400.0, 300.0);
        layer.tick(&FrameInput { dt: 0.016, pointer });
        assert_eq!(layer.surface().unwrap().circle_count(), 20);
    }

    #[test]
    fn orb_tick_translates_stage() {
        let mut follower = OrbFollower::from_config(&OrbsConfig::default());
        follower.set_target(Point::new(600.0, 400.0));
        let mut layer = OrbLayer::new(follower, Some(vec![Point::ORIGIN; 3]));
        layer.tick(&FrameInput::default());
        let stage = layer.stage().unwrap();
        // purple: 0 + 600 * 0.03 - 200
        assert!((stage[0].x - (18.0 - 200.0)).abs() < 1e-4);
    }

    #[test]
    fn orb_tick_without_stage_still_eases() {
        let mut follower = OrbFollower::from_config(&OrbsConfig::default());
        follower.set_target(Point::new(100.0, 100.0));
        let mut layer: OrbLayer<Vec<Point>> = OrbLayer::new(follower, None);
        layer.tick(&FrameInput::default());
        assert!(layer.follower().states()[0].x > 0.0);
    }

    #[test]
    fn tween_tick_advances_cursor() {
        let mut cursor = Cursor::default();
        cursor.pointer_moved(Point::new(50.0, 50.0));
        let mut layer = TweenLayer {
            cursor: Some(cursor),
            magnetic: MagneticButtons::new(0.3),
            scroll: ScrollEffects::new(&ScrollConfig::default()),
        };
        layer.tick(&FrameInput {
            dt: 1.0,
            ..Default::default()
        });
        assert_eq!(layer.cursor.as_ref().unwrap().ring(), Point::new(50.0, 50.0));
    }
}

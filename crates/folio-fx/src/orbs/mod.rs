//! Glow orbs that trail the pointer with per-orb easing.
//!
//! Each orb chases `target + offset` by a fixed fraction of the remaining
//! distance every tick, so slower rates trail further behind.

mod stage;

pub use stage::OrbStage;

use folio_common::{Color, Point};
use folio_config::schema::{OrbConfig, OrbsConfig};
use tracing::debug;

/// Static parameters of one orb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbSpec {
    pub color: Color,
    /// Fraction of the remaining distance covered per tick.
    pub rate: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl OrbSpec {
    pub fn from_config(config: &OrbConfig) -> Self {
        Self {
            color: Color::from_hex(&config.color).unwrap_or(Color::from_rgb(168, 85, 247)),
            rate: config.rate as f32,
            offset_x: config.offset_x as f32,
            offset_y: config.offset_y as f32,
        }
    }
}

/// Eased position of one orb and the pointer position it is chasing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbState {
    pub x: f32,
    pub y: f32,
    pub target_x: f32,
    pub target_y: f32,
}

/// Translation to apply to an orb element, already corrected for its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbTransform {
    pub x: f32,
    pub y: f32,
}

/// All orbs plus their easing state.
#[derive(Debug, Clone)]
pub struct OrbFollower {
    specs: Vec<OrbSpec>,
    states: Vec<OrbState>,
    size: f32,
}

impl OrbFollower {
    /// Orbs start at the origin with the origin as target.
    pub fn new(specs: Vec<OrbSpec>, size: f32) -> Self {
        let states = vec![OrbState::default(); specs.len()];
        Self {
            specs,
            states,
            size,
        }
    }

    pub fn from_config(config: &OrbsConfig) -> Self {
        let specs: Vec<OrbSpec> = config.orbs.iter().map(OrbSpec::from_config).collect();
        debug!(orbs = specs.len(), size = config.size, "orb follower ready");
        Self::new(specs, config.size as f32)
    }

    /// Point every orb at the pointer. Offsets are applied at tick time.
    pub fn set_target(&mut self, pointer: Point) {
        for state in &mut self.states {
            state.target_x = pointer.x;
            state.target_y = pointer.y;
        }
    }

    /// Ease every orb one step toward its offset target.
    pub fn tick(&mut self) {
        for (state, spec) in self.states.iter_mut().zip(&self.specs) {
            let goal_x = state.target_x + spec.offset_x;
            let goal_y = state.target_y + spec.offset_y;
            state.x += (goal_x - state.x) * spec.rate;
            state.y += (goal_y - state.y) * spec.rate;
        }
    }

    /// Per-orb translations, centering each `size`-wide orb on its point.
    pub fn transforms(&self) -> impl Iterator<Item = OrbTransform> + '_ {
        let half = self.size / 2.0;
        self.states.iter().map(move |s| OrbTransform {
            x: s.x - half,
            y: s.y - half,
        })
    }

    /// Push the current transforms to `stage`. Orbs the stage lacks are skipped.
    pub fn apply<T: OrbStage + ?Sized>(&self, stage: &mut T) {
        let available = stage.len();
        for (index, t) in self.transforms().enumerate().take(available) {
            stage.translate(index, t.x, t.y);
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[OrbState] {
        &self.states
    }

    pub fn specs(&self) -> &[OrbSpec] {
        &self.specs
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(rate: f32, offset_x: f32, offset_y: f32) -> OrbFollower {
        OrbFollower::new(
            vec![OrbSpec {
                color: Color::from_rgb(255, 255, 255),
                rate,
                offset_x,
                offset_y,
            }],
            400.0,
        )
    }

    #[test]
    fn default_config_builds_three_orbs() {
        let follower = OrbFollower::from_config(&OrbsConfig::default());
        assert_eq!(follower.len(), 3);
        assert_eq!(follower.specs()[1].color, Color::from_rgb(236, 72, 153));
        assert!((follower.specs()[2].offset_y - 80.0).abs() < 1e-6);
        assert!((follower.size() - 400.0).abs() < 1e-6);
    }

    #[test]
    fn first_tick_covers_rate_fraction() {
        let mut follower = single(0.03, 0.0, 0.0);
        follower.set_target(Point::new(100.0, 200.0));
        follower.tick();
        let s = follower.states()[0];
        assert!((s.x - 3.0).abs() < 1e-5);
        assert!((s.y - 6.0).abs() < 1e-5);
    }

    #[test]
    fn convergence_matches_closed_form() {
        let rate = 0.02_f32;
        let mut follower = single(rate, 0.0, 0.0);
        follower.set_target(Point::new(500.0, -300.0));

        for _ in 0..60 {
            follower.tick();
        }

        let remaining = (1.0 - rate).powi(60);
        let s = follower.states()[0];
        assert!((s.x - (500.0 - 500.0 * remaining)).abs() < 1e-2);
        assert!((s.y - (-300.0 + 300.0 * remaining)).abs() < 1e-2);
    }

    #[test]
    fn never_overshoots() {
        let mut follower = single(0.3, 0.0, 0.0);
        follower.set_target(Point::new(250.0, 250.0));
        let mut last = 0.0;
        for _ in 0..200 {
            follower.tick();
            let x = follower.states()[0].x;
            assert!(x >= last && x <= 250.0, "x = {x}");
            last = x;
        }
    }

    #[test]
    fn offset_shifts_resting_point() {
        let mut follower = single(1.0, 100.0, -50.0);
        follower.set_target(Point::new(10.0, 10.0));
        follower.tick();
        let s = follower.states()[0];
        assert!((s.x - 110.0).abs() < 1e-5);
        assert!((s.y + 40.0).abs() < 1e-5);
    }

    #[test]
    fn transforms_center_the_orb() {
        let mut follower = single(1.0, 0.0, 0.0);
        follower.set_target(Point::new(300.0, 250.0));
        follower.tick();
        let t: Vec<_> = follower.transforms().collect();
        assert_eq!(t, [OrbTransform { x: 100.0, y: 50.0 }]);
    }

    #[test]
    fn apply_skips_orbs_the_stage_lacks() {
        let mut follower = OrbFollower::from_config(&OrbsConfig::default());
        follower.set_target(Point::new(400.0, 400.0));
        follower.tick();

        let mut stage = vec![Point::ORIGIN; 2];
        follower.apply(&mut stage);
        let expected: Vec<_> = follower.transforms().take(2).collect();
        assert_eq!(stage[0], Point::new(expected[0].x, expected[0].y));
        assert_eq!(stage[1], Point::new(expected[1].x, expected[1].y));
    }

    #[test]
    fn easing_advances_without_stage() {
        let mut follower = single(0.5, 0.0, 0.0);
        follower.set_target(Point::new(100.0, 0.0));
        follower.tick();
        follower.tick();
        assert!((follower.states()[0].x - 75.0).abs() < 1e-5);
    }
}

//! Two-layer custom cursor and magnetic buttons.
//!
//! The ring trails the pointer on a short tween while the dot snaps to it.

mod magnetic;

pub use magnetic::{magnetic_offset, MagneticButtons};

use folio_common::Point;
use folio_config::schema::CursorConfig;

use crate::tween::{Ease, Tween};

/// One cursor layer: an x/y tween pair sharing a duration.
#[derive(Debug, Clone, PartialEq)]
struct Follower {
    x: Tween,
    y: Tween,
    duration: f32,
}

impl Follower {
    fn new(duration: f32, ease: Ease) -> Self {
        Self {
            x: Tween::at(0.0, ease),
            y: Tween::at(0.0, ease),
            duration,
        }
    }

    fn retarget(&mut self, pointer: Point) {
        self.x.retarget(pointer.x, self.duration);
        self.y.retarget(pointer.y, self.duration);
    }

    fn advance(&mut self, dt: f32) {
        self.x.advance(dt);
        self.y.advance(dt);
    }

    fn position(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    fn is_settled(&self) -> bool {
        self.x.is_finished() && self.y.is_finished()
    }
}

/// Custom cursor state: lagging ring, instant dot and hover flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    ring: Follower,
    dot: Follower,
    hovered: bool,
}

impl Cursor {
    pub fn new(ring_duration: f32, ring_ease: Ease, dot_duration: f32) -> Self {
        Self {
            ring: Follower::new(ring_duration, ring_ease),
            dot: Follower::new(dot_duration, Ease::Linear),
            hovered: false,
        }
    }

    pub fn from_config(config: &CursorConfig) -> Self {
        Self::new(
            config.ring_duration as f32,
            config.ring_ease.into(),
            config.dot_duration as f32,
        )
    }

    /// Retarget both layers. The ring continues from its current position.
    pub fn pointer_moved(&mut self, pointer: Point) {
        self.ring.retarget(pointer);
        self.dot.retarget(pointer);
    }

    pub fn advance(&mut self, dt: f32) {
        self.ring.advance(dt);
        self.dot.advance(dt);
    }

    pub fn ring(&self) -> Point {
        self.ring.position()
    }

    pub fn dot(&self) -> Point {
        self.dot.position()
    }

    /// True once both layers have reached the last pointer position.
    pub fn is_settled(&self) -> bool {
        self.ring.is_settled() && self.dot.is_settled()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::from_config(&CursorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_snaps_immediately() {
        let mut cursor = Cursor::default();
        cursor.pointer_moved(Point::new(120.0, 80.0));
        assert_eq!(cursor.dot(), Point::new(120.0, 80.0));
        assert_eq!(cursor.ring(), Point::ORIGIN);
        assert!(!cursor.is_settled());
    }

    #[test]
    fn ring_arrives_after_duration() {
        let mut cursor = Cursor::default();
        cursor.pointer_moved(Point::new(100.0, 100.0));

        cursor.advance(0.075);
        let halfway = cursor.ring();
        // power2.out at t = 0.5 is 0.875
        assert!((halfway.x - 87.5).abs() < 1e-3, "x = {}", halfway.x);

        cursor.advance(0.1);
        assert_eq!(cursor.ring(), Point::new(100.0, 100.0));
        assert!(cursor.is_settled());
    }

    #[test]
    fn new_move_retargets_from_current_ring() {
        let mut cursor = Cursor::default();
        cursor.pointer_moved(Point::new(100.0, 0.0));
        cursor.advance(0.075);
        let mid = cursor.ring();

        cursor.pointer_moved(Point::new(0.0, 0.0));
        assert_eq!(cursor.ring(), mid);
        cursor.advance(0.15);
        assert!(cursor.ring().x.abs() < 1e-4);
    }

    #[test]
    fn hover_flag_toggles() {
        let mut cursor = Cursor::default();
        assert!(!cursor.is_hovered());
        cursor.set_hovered(true);
        assert!(cursor.is_hovered());
        cursor.set_hovered(false);
        assert!(!cursor.is_hovered());
    }
}

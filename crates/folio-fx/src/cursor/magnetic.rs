use std::collections::HashMap;

use folio_common::{Point, Rect};

/// Translation for a magnetic button: the pointer's offset from the button
/// center, scaled by `strength`.
pub fn magnetic_offset(pointer: Point, bounds: Rect, strength: f32) -> Point {
    let center = bounds.center();
    Point::new(
        (pointer.x - center.x) * strength,
        (pointer.y - center.y) * strength,
    )
}

/// Current translation of every magnetic button, keyed by button index.
#[derive(Debug, Clone, Default)]
pub struct MagneticButtons {
    strength: f32,
    offsets: HashMap<usize, Point>,
}

impl MagneticButtons {
    pub fn new(strength: f32) -> Self {
        Self {
            strength,
            offsets: HashMap::new(),
        }
    }

    /// Pointer moved over `button`, whose current bounds are `bounds`.
    ///
    /// A pointer outside `bounds` counts as a leave.
    pub fn pointer_move(&mut self, button: usize, bounds: Rect, pointer: Point) -> Point {
        if !bounds.contains(pointer) {
            self.leave(button);
            return Point::ORIGIN;
        }
        let offset = magnetic_offset(pointer, bounds, self.strength);
        self.offsets.insert(button, offset);
        offset
    }

    /// Pointer left `button`; it snaps back to rest.
    pub fn leave(&mut self, button: usize) {
        self.offsets.remove(&button);
    }

    /// Translation of `button`, origin when at rest.
    pub fn offset(&self, button: usize) -> Point {
        self.offsets.get(&button).copied().unwrap_or(Point::ORIGIN)
    }

    /// Number of buttons currently pulled off rest.
    pub fn active(&self) -> usize {
        self.offsets.len()
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }
}

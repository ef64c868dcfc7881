//! Last-known pointer position.

use folio_common::Point;

/// Pointer position as seen by the frame loops.
///
/// Starts empty; every move overwrites the previous value, so a tick always
/// sees the most recent position and never a queue of them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    position: Option<Point>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moved_to(&mut self, x: f32, y: f32) {
        self.position = Some(Point::new(x, y));
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }
}

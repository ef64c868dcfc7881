use folio_common::Point;

/// Host-side orb elements, addressed by index.
pub trait OrbStage {
    /// Number of orb elements present.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Translate orb `index` to `(x, y)`. Out-of-range indices are ignored.
    fn translate(&mut self, index: usize, x: f32, y: f32);
}

/// Headless stage: each slot holds the last translation.
impl OrbStage for Vec<Point> {
    fn len(&self) -> usize {
        <[Point]>::len(self)
    }

    fn translate(&mut self, index: usize, x: f32, y: f32) {
        if let Some(slot) = self.get_mut(index) {
            *slot = Point::new(x, y);
        }
    }
}

//! 2D drawing surface abstraction.
//!
//! The particle layer only needs four primitives from the host canvas, so
//! the host binds whatever it has (a browser canvas, a raster buffer, the
//! [`RecordingSurface`]) behind this trait.

mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use folio_common::{Color, Point};

/// Fill style for a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: Color,
    /// Global alpha applied to the whole shape (0.0-1.0).
    pub alpha: f32,
}

/// Stroke style for a line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Stroke opacity (0.0-1.0).
    pub alpha: f32,
    pub width: f32,
}

/// Minimal immediate-mode drawing surface.
pub trait Surface {
    /// Resize the backing store. Resizing discards everything drawn so far.
    fn set_size(&mut self, width: f32, height: f32);

    /// Clear the whole surface.
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Point, radius: f32, fill: Fill);

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke);
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn set_size(&mut self, width: f32, height: f32) {
        (**self).set_size(width, height);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn fill_circle(&mut self, center: Point, radius: f32, fill: Fill) {
        (**self).fill_circle(center, radius, fill);
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        (**self).stroke_line(from, to, stroke);
    }
}

use folio_common::Point;

use super::{Fill, Stroke, Surface};

/// One primitive drawn since the last clear.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: f32,
        fill: Fill,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
}

/// Surface that keeps the commands currently "on screen".
///
/// `clear` and `set_size` drop the recorded commands, the same way a real
/// canvas loses its pixels.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
    clears: u64,
    resizes: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Lines with `to` at `target`, i.e. pointer links when `target` is the pointer.
    pub fn lines_to(&self, target: Point) -> impl Iterator<Item = (&Point, &Stroke)> {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Line { from, to, stroke } if *to == target => Some((from, stroke)),
            _ => None,
        })
    }

    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    pub fn resize_count(&self) -> u64 {
        self.resizes
    }
}

impl Surface for RecordingSurface {
    fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
        self.resizes += 1;
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: Point, radius: f32, fill: Fill) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::Color;

    fn stroke() -> Stroke {
        Stroke {
            color: Color::from_rgb(167, 139, 250),
            alpha: 0.2,
            width: 0.5,
        }
    }

    #[test]
    fn records_circles_and_lines() {
        let mut surface = RecordingSurface::new();
        surface.fill_circle(
            Point::new(1.0, 1.0),
            2.0,
            Fill {
                color: Color::from_rgb(255, 255, 255),
                alpha: 1.0,
            },
        );
        surface.stroke_line(Point::new(0.0, 0.0), Point::new(5.0, 5.0), stroke());
        assert_eq!(surface.circle_count(), 1);
        assert_eq!(surface.line_count(), 1);
    }

    #[test]
    fn clear_drops_commands() {
        let mut surface = RecordingSurface::new();
        surface.stroke_line(Point::new(0.0, 0.0), Point::new(5.0, 5.0), stroke());
        surface.clear();
        assert!(surface.commands().is_empty());
        assert_eq!(surface.clear_count(), 1);
    }

    #[test]
    fn set_size_updates_extent_and_discards_contents() {
        let mut surface = RecordingSurface::new();
        surface.stroke_line(Point::new(0.0, 0.0), Point::new(5.0, 5.0), stroke());
        surface.set_size(800.0, 600.0);
        assert_eq!(surface.size(), (800.0, 600.0));
        assert!(surface.commands().is_empty());
        assert_eq!(surface.resize_count(), 1);
    }

    #[test]
    fn lines_to_filters_by_endpoint() {
        let mut surface = RecordingSurface::new();
        let pointer = Point::new(50.0, 50.0);
        surface.stroke_line(Point::new(0.0, 0.0), pointer, stroke());
        surface.stroke_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), stroke());
        assert_eq!(surface.lines_to(pointer).count(), 1);
    }

    #[test]
    fn boxed_surface_forwards() {
        let mut boxed: Box<RecordingSurface> = Box::new(RecordingSurface::new());
        Surface::set_size(&mut boxed, 10.0, 20.0);
        assert_eq!(boxed.size(), (10.0, 20.0));
    }
}

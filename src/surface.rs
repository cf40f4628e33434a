use crate::geometry::{Bounds, Point};
use crate::style::{Brush, Pen};

/// Abstract 2D drawing target.
///
/// Shapes emit their primitives through this trait so the editing core never
/// depends on a particular rendering backend. All coordinates are canvas
/// coordinates; the implementation maps them to its own space.
pub trait Surface {
    fn draw_line(&mut self, from: Point, to: Point, pen: &Pen);

    fn draw_rect(&mut self, bounds: Bounds, pen: &Pen, brush: &Brush);

    /// Ellipse inscribed in `bounds`
    fn draw_ellipse(&mut self, bounds: Bounds, pen: &Pen, brush: &Brush);

    /// Open polyline through every point in order
    fn draw_polyline(&mut self, points: &[Point], pen: &Pen);

    fn draw_point(&mut self, point: Point, pen: &Pen);

    /// Unfilled rectangle with a dashed outline
    fn draw_dashed_rect(&mut self, bounds: Bounds, pen: &Pen);
}

/// A single primitive captured by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Line { from: Point, to: Point, pen: Pen },
    Rect { bounds: Bounds, pen: Pen, brush: Brush },
    Ellipse { bounds: Bounds, pen: Pen, brush: Brush },
    Polyline { points: Vec<Point>, pen: Pen },
    Point { point: Point, pen: Pen },
    DashedRect { bounds: Bounds, pen: Pen },
}

/// Headless surface that remembers every call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, from: Point, to: Point, pen: &Pen) {
        self.calls.push(DrawCall::Line { from, to, pen: *pen });
    }

    fn draw_rect(&mut self, bounds: Bounds, pen: &Pen, brush: &Brush) {
        self.calls.push(DrawCall::Rect {
            bounds,
            pen: *pen,
            brush: *brush,
        });
    }

    fn draw_ellipse(&mut self, bounds: Bounds, pen: &Pen, brush: &Brush) {
        self.calls.push(DrawCall::Ellipse {
            bounds,
            pen: *pen,
            brush: *brush,
        });
    }

    fn draw_polyline(&mut self, points: &[Point], pen: &Pen) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            pen: *pen,
        });
    }

    fn draw_point(&mut self, point: Point, pen: &Pen) {
        self.calls.push(DrawCall::Point { point, pen: *pen });
    }

    fn draw_dashed_rect(&mut self, bounds: Bounds, pen: &Pen) {
        self.calls.push(DrawCall::DashedRect { bounds, pen: *pen });
    }
}

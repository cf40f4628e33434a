use std::fmt;

use egui::Color32;
use log::warn;

mod common;
pub(crate) mod ellipse;
pub(crate) mod line;
pub(crate) mod pencil;
pub(crate) mod rect;

pub use common::{SELECTION_MARGIN, ShapeCore};
pub use ellipse::EllipseShape;
pub use line::Line;
pub use pencil::Pencil;
pub use rect::RectShape;

use crate::geometry::{Bounds, Point};
use crate::style::{Brush, Pen};
use crate::surface::Surface;

/// Stable key of a shape inside the model's shape store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub(crate) usize);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape#{}", self.0)
    }
}

/// The drawable shape variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rect,
    Ellipse,
    Pencil,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rect => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Pencil => "pencil",
        }
    }
}

/// Common trait that all drawable shapes implement.
///
/// Implementors provide access to their [`ShapeCore`] plus the three
/// variant-specific behaviours (`apply_update`, `apply_finalize`, `draw`);
/// everything else is derived from the core.
pub trait Shape {
    fn kind(&self) -> ShapeKind;

    fn core(&self) -> &ShapeCore;

    fn core_mut(&mut self) -> &mut ShapeCore;

    /// Variant-specific reaction to a new gesture point
    fn apply_update(&mut self, point: Point);

    /// Variant-specific work when the gesture ends
    fn apply_finalize(&mut self) {}

    /// Emit this shape's primitive, translated by its offset
    fn draw(&self, surface: &mut dyn Surface);

    /// Feed the next gesture point. Ignored once the shape is finalized.
    fn update(&mut self, point: Point) {
        if self.core().finalized {
            warn!("Ignoring update of finalized {}", self.kind().name());
            return;
        }
        self.apply_update(point);
    }

    /// Lock the shape's geometry. Calling it twice is harmless.
    fn finalize(&mut self) {
        if self.core().finalized {
            return;
        }
        self.apply_finalize();
        self.core_mut().finalized = true;
    }

    fn is_finalized(&self) -> bool {
        self.core().finalized
    }

    /// Bounding box, without the positional offset
    fn bounds(&self) -> Bounds {
        self.core().bounds
    }

    /// Inclusive test against the offset-adjusted bounding box.
    fn hit_test(&self, point: Point) -> bool {
        self.core().placed_bounds().contains(point)
    }

    fn pen(&self) -> Pen {
        self.core().pen
    }

    fn set_pen(&mut self, pen: Pen) {
        self.core_mut().pen = pen;
    }

    fn brush(&self) -> Brush {
        self.core().brush
    }

    fn set_brush(&mut self, brush: Brush) {
        self.core_mut().brush = brush;
    }

    fn offset(&self) -> Point {
        self.core().offset
    }

    fn set_offset(&mut self, offset: Point) {
        self.core_mut().offset = offset;
    }

    /// Region drawn as the selection outline; doubles as the move handle
    fn selection_rect(&self) -> Bounds {
        self.core().placed_bounds().expand(SELECTION_MARGIN)
    }

    fn draw_selection(&self, surface: &mut dyn Surface) {
        surface.draw_dashed_rect(self.selection_rect(), &Pen::new(Color32::BLACK, 1));
    }
}

/// Enumeration of all shape types held by the model
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeType {
    Line(Line),
    Rect(RectShape),
    Ellipse(EllipseShape),
    Pencil(Pencil),
}

impl ShapeType {
    /// The recorded freehand points, if this is a pencil path
    pub fn pencil_points(&self) -> Option<&[Point]> {
        match self {
            ShapeType::Pencil(p) => Some(p.points()),
            _ => None,
        }
    }
}

impl Shape for ShapeType {
    fn kind(&self) -> ShapeKind {
        match self {
            ShapeType::Line(s) => s.kind(),
            ShapeType::Rect(s) => s.kind(),
            ShapeType::Ellipse(s) => s.kind(),
            ShapeType::Pencil(s) => s.kind(),
        }
    }

    fn core(&self) -> &ShapeCore {
        match self {
            ShapeType::Line(s) => s.core(),
            ShapeType::Rect(s) => s.core(),
            ShapeType::Ellipse(s) => s.core(),
            ShapeType::Pencil(s) => s.core(),
        }
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        match self {
            ShapeType::Line(s) => s.core_mut(),
            ShapeType::Rect(s) => s.core_mut(),
            ShapeType::Ellipse(s) => s.core_mut(),
            ShapeType::Pencil(s) => s.core_mut(),
        }
    }

    fn apply_update(&mut self, point: Point) {
        match self {
            ShapeType::Line(s) => s.apply_update(point),
            ShapeType::Rect(s) => s.apply_update(point),
            ShapeType::Ellipse(s) => s.apply_update(point),
            ShapeType::Pencil(s) => s.apply_update(point),
        }
    }

    fn apply_finalize(&mut self) {
        match self {
            ShapeType::Line(s) => s.apply_finalize(),
            ShapeType::Rect(s) => s.apply_finalize(),
            ShapeType::Ellipse(s) => s.apply_finalize(),
            ShapeType::Pencil(s) => s.apply_finalize(),
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        match self {
            ShapeType::Line(s) => s.draw(surface),
            ShapeType::Rect(s) => s.draw(surface),
            ShapeType::Ellipse(s) => s.draw(surface),
            ShapeType::Pencil(s) => s.draw(surface),
        }
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;

    /// Create a shape of the given kind anchored at `start`
    pub fn create_shape(kind: ShapeKind, start: Point) -> ShapeType {
        match kind {
            ShapeKind::Line => ShapeType::Line(Line::new(start)),
            ShapeKind::Rect => ShapeType::Rect(RectShape::new(start)),
            ShapeKind::Ellipse => ShapeType::Ellipse(EllipseShape::new(start)),
            ShapeKind::Pencil => ShapeType::Pencil(Pencil::new(start)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, RecordingSurface};

    #[test]
    fn test_two_point_update_replaces_end() {
        let mut shape = factory::create_shape(ShapeKind::Rect, Point::new(10, 10));
        shape.update(Point::new(80, 80));
        shape.update(Point::new(50, 40));

        assert_eq!(shape.core().end(), Point::new(50, 40));
        assert_eq!(
            shape.bounds(),
            Bounds::from_corners(Point::new(10, 10), Point::new(50, 40))
        );
    }

    #[test]
    fn test_update_after_finalize_is_ignored() {
        let mut shape = factory::create_shape(ShapeKind::Line, Point::new(0, 0));
        shape.update(Point::new(5, 5));
        shape.finalize();
        shape.update(Point::new(100, 100));

        assert!(shape.is_finalized());
        assert_eq!(shape.bounds().bot_right, Point::new(5, 5));
    }

    #[test]
    fn test_hit_test_uses_offset() {
        let mut shape = factory::create_shape(ShapeKind::Ellipse, Point::new(0, 0));
        shape.update(Point::new(10, 10));
        shape.set_offset(Point::new(100, 0));

        assert!(!shape.hit_test(Point::new(5, 5)));
        assert!(shape.hit_test(Point::new(105, 5)));
        assert!(shape.hit_test(Point::new(110, 10)));
    }

    #[test]
    fn test_draw_primitives() {
        let mut surface = RecordingSurface::new();

        let mut line = factory::create_shape(ShapeKind::Line, Point::new(1, 2));
        line.update(Point::new(3, 4));
        line.set_offset(Point::new(10, 10));
        line.draw(&mut surface);

        let single = factory::create_shape(ShapeKind::Pencil, Point::new(7, 7));
        single.draw(&mut surface);

        let mut ellipse = factory::create_shape(ShapeKind::Ellipse, Point::new(0, 0));
        ellipse.update(Point::new(20, 10));
        ellipse.draw(&mut surface);

        let calls = surface.calls();
        assert_eq!(calls.len(), 3);
        assert!(matches!(
            calls[0],
            DrawCall::Line { from, to, .. } if from == Point::new(11, 12) && to == Point::new(13, 14)
        ));
        assert!(matches!(calls[1], DrawCall::Point { point, .. } if point == Point::new(7, 7)));
        assert!(matches!(
            calls[2],
            DrawCall::Ellipse { bounds, .. } if bounds.bot_right == Point::new(20, 10)
        ));
    }

    #[test]
    fn test_selection_outline_surrounds_bounds() {
        let mut shape = factory::create_shape(ShapeKind::Rect, Point::new(10, 10));
        shape.update(Point::new(20, 20));

        let mut surface = RecordingSurface::new();
        shape.draw_selection(&mut surface);

        let expected = Bounds::from_corners(Point::new(8, 8), Point::new(22, 22));
        assert_eq!(shape.selection_rect(), expected);
        assert!(matches!(surface.calls()[0], DrawCall::DashedRect { bounds, .. } if bounds == expected));
    }
}

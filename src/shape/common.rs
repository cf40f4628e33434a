use crate::geometry::{Bounds, Point};
use crate::style::{Brush, Pen};

/// Distance between a shape's bounds and its selection outline.
pub const SELECTION_MARGIN: i32 = 2;

/// State shared by every shape variant.
///
/// `bounds` is kept in sync with the recorded points after every mutation;
/// `offset` is applied on top of it when drawing and hit-testing.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeCore {
    pub(crate) start: Point,
    pub(crate) end: Point,
    pub(crate) bounds: Bounds,
    pub(crate) pen: Pen,
    pub(crate) brush: Brush,
    pub(crate) offset: Point,
    pub(crate) finalized: bool,
}

impl ShapeCore {
    pub(crate) fn new(start: Point) -> Self {
        Self {
            start,
            end: start,
            bounds: Bounds::at(start),
            pen: Pen::default(),
            brush: Brush::default(),
            offset: Point::ORIGIN,
            finalized: false,
        }
    }

    /// Replaces the end point and recomputes bounds from start and end
    pub(crate) fn set_end(&mut self, end: Point) {
        self.end = end;
        self.bounds = Bounds::from_corners(self.start, self.end);
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Bounds moved by the positional offset
    pub fn placed_bounds(&self) -> Bounds {
        self.bounds.translate(self.offset)
    }
}

use super::common::ShapeCore;
use super::{Shape, ShapeKind};
use crate::geometry::Point;
use crate::surface::Surface;

/// Straight segment from the gesture's start to its current point
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    core: ShapeCore,
}

impl Line {
    pub fn new(start: Point) -> Self {
        Self {
            core: ShapeCore::new(start),
        }
    }
}

impl Shape for Line {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn apply_update(&mut self, point: Point) {
        self.core.set_end(point);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let offset = self.core.offset;
        surface.draw_line(
            self.core.start.translate(offset),
            self.core.end.translate(offset),
            &self.core.pen,
        );
    }
}

use super::common::ShapeCore;
use super::{Shape, ShapeKind};
use crate::geometry::Point;
use crate::surface::Surface;

/// Ellipse inscribed in the box dragged out by the gesture
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseShape {
    core: ShapeCore,
}

impl EllipseShape {
    pub fn new(start: Point) -> Self {
        Self {
            core: ShapeCore::new(start),
        }
    }
}

impl Shape for EllipseShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
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
        surface.draw_ellipse(self.core.placed_bounds(), &self.core.pen, &self.core.brush);
    }
}

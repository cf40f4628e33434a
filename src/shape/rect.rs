use super::common::ShapeCore;
use super::{Shape, ShapeKind};
use crate::geometry::Point;
use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    core: ShapeCore,
}

impl RectShape {
    pub fn new(start: Point) -> Self {
        Self {
            core: ShapeCore::new(start),
        }
    }
}

impl Shape for RectShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rect
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
        surface.draw_rect(self.core.placed_bounds(), &self.core.pen, &self.core.brush);
    }
}

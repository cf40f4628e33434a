use log::debug;

use super::common::ShapeCore;
use super::{Shape, ShapeKind};
use crate::geometry::{Bounds, Point};
use crate::surface::Surface;

/// Freehand path recording every pointer position of the gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Pencil {
    core: ShapeCore,
    points: Vec<Point>,
}

impl Pencil {
    pub fn new(start: Point) -> Self {
        Self {
            core: ShapeCore::new(start),
            points: vec![start],
        }
    }

    /// Recorded points in gesture order
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Shape for Pencil {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Pencil
    }

    fn core(&self) -> &ShapeCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ShapeCore {
        &mut self.core
    }

    fn apply_update(&mut self, point: Point) {
        self.core.end = point;
        self.points.push(point);
        self.core.bounds = self.core.bounds.include(point);
    }

    fn apply_finalize(&mut self) {
        // Seeded from the first recorded point, never from the origin.
        if let Some(bounds) = Bounds::from_points(self.points.iter().copied()) {
            self.core.bounds = bounds;
        }
        debug!(
            "Pencil path finalized: {} points, bounds {:?}",
            self.points.len(),
            self.core.bounds
        );
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let offset = self.core.offset;
        match self.points.as_slice() {
            [] => {}
            [single] => surface.draw_point(single.translate(offset), &self.core.pen),
            points => {
                let placed: Vec<Point> = points.iter().map(|p| p.translate(offset)).collect();
                surface.draw_polyline(&placed, &self.core.pen);
            }
        }
    }
}

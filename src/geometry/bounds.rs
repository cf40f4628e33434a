use egui::Rect;
use serde::{Deserialize, Serialize};

use super::Point;

/// Axis-aligned box spanned by a top-left and a bottom-right corner.
///
/// Both corners are part of the box: `contains` is inclusive on every edge,
/// which is what shape hit-testing relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub top_left: Point,
    pub bot_right: Point,
}

impl Bounds {
    /// Degenerate box covering a single point
    pub fn at(point: Point) -> Self {
        Self {
            top_left: point,
            bot_right: point,
        }
    }

    /// Component-wise min/max of two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            top_left: Point::new(a.x.min(b.x), a.y.min(b.y)),
            bot_right: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Smallest box containing every point, seeded from the first one.
    ///
    /// Returns `None` for an empty sequence.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Bounds::at(first), Bounds::include))
    }

    /// Grows the box just enough to cover `point`
    pub fn include(self, point: Point) -> Self {
        Self {
            top_left: Point::new(self.top_left.x.min(point.x), self.top_left.y.min(point.y)),
            bot_right: Point::new(self.bot_right.x.max(point.x), self.bot_right.y.max(point.y)),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.bot_right.x
            && point.y >= self.top_left.y
            && point.y <= self.bot_right.y
    }

    pub fn translate(self, offset: Point) -> Self {
        Self {
            top_left: self.top_left.translate(offset),
            bot_right: self.bot_right.translate(offset),
        }
    }

    /// Pushes every edge outward by `margin`.
    pub fn expand(self, margin: i32) -> Self {
        Self {
            top_left: Point::new(self.top_left.x - margin, self.top_left.y - margin),
            bot_right: Point::new(self.bot_right.x + margin, self.bot_right.y + margin),
        }
    }

    pub fn width(&self) -> i32 {
        self.bot_right.x - self.top_left.x
    }

    pub fn height(&self) -> i32 {
        self.bot_right.y - self.top_left.y
    }

    pub fn to_rect(self) -> Rect {
        Rect::from_min_max(self.top_left.to_pos2(), self.bot_right.to_pos2())
    }
}

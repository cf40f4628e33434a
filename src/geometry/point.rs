use std::ops::{Add, Sub};

use egui::Pos2;
use serde::{Deserialize, Serialize};

/// Integer canvas coordinate. Also used as a translation offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `offset`.
    pub fn translate(self, offset: Point) -> Point {
        Point::new(self.x + offset.x, self.y + offset.y)
    }

    /// The offset that carries `origin` onto `self`.
    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    /// Rounds an egui position to the nearest canvas coordinate
    pub fn from_pos2(pos: Pos2) -> Self {
        Point::new(pos.x.round() as i32, pos.y.round() as i32)
    }

    pub fn to_pos2(self) -> Pos2 {
        Pos2::new(self.x as f32, self.y as f32)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.translate(rhs)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        self.offset_from(rhs)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

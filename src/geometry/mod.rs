mod bounds;
mod point;

pub use bounds::Bounds;
pub use point::Point;

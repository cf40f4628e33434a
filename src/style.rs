use egui::Color32;
use serde::{Deserialize, Serialize};

/// Widest pen the editor accepts.
pub const MAX_PEN_WIDTH: u32 = 10;

/// Outline style used for lines and shape borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pen {
    pub color: Color32,
    pub width: u32,
}

impl Pen {
    pub const fn new(color: Color32, width: u32) -> Self {
        Self { color, width }
    }

    /// Returns true if the width lies in `1..=MAX_PEN_WIDTH`
    pub fn is_valid_width(width: u32) -> bool {
        (1..=MAX_PEN_WIDTH).contains(&width)
    }

    pub fn to_egui(self) -> egui::Stroke {
        egui::Stroke::new(self.width as f32, self.color)
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Color32::BLACK, 1)
    }
}

/// Interior fill of closed shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brush {
    pub color: Color32,
}

impl Brush {
    pub const fn new(color: Color32) -> Self {
        Self { color }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}

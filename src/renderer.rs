// src/renderer.rs
use eframe::egui::{self, Painter, Pos2, Shape as EguiShape, Vec2};

use crate::geometry::{Bounds, Point};
use crate::style::{Brush, Pen};
use crate::surface::Surface;

const DASH_LENGTH: f32 = 4.0;
const DASH_GAP: f32 = 3.0;

/// Draws canvas primitives onto an egui painter.
///
/// Canvas coordinates are integer and relative to the canvas' top-left corner;
/// `origin` is where that corner sits on screen.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterSurface<'a> {
    /// Creates a surface whose canvas origin is at `origin` in screen space
    ///
    /// Args:
    ///     painter (Painter): The painter to emit egui shapes into
    ///     origin (Pos2): Screen position of canvas coordinate (0, 0)
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        self.origin + point.to_pos2().to_vec2()
    }

    fn rect_to_screen(&self, bounds: Bounds) -> egui::Rect {
        bounds.to_rect().translate(self.origin.to_vec2())
    }
}

impl Surface for PainterSurface<'_> {
    fn draw_line(&mut self, from: Point, to: Point, pen: &Pen) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], pen.to_egui());
    }

    fn draw_rect(&mut self, bounds: Bounds, pen: &Pen, brush: &Brush) {
        self.painter
            .rect(self.rect_to_screen(bounds), 0.0, brush.color, pen.to_egui());
    }

    fn draw_ellipse(&mut self, bounds: Bounds, pen: &Pen, brush: &Brush) {
        let rect = self.rect_to_screen(bounds);
        self.painter.add(EguiShape::Ellipse(egui::epaint::EllipseShape {
            center: rect.center(),
            radius: Vec2::new(rect.width() / 2.0, rect.height() / 2.0),
            fill: brush.color,
            stroke: pen.to_egui(),
        }));
    }

    fn draw_polyline(&mut self, points: &[Point], pen: &Pen) {
        let points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(EguiShape::line(points, pen.to_egui()));
    }

    fn draw_point(&mut self, point: Point, pen: &Pen) {
        let radius = (pen.width as f32 / 2.0).max(0.5);
        self.painter
            .circle_filled(self.to_screen(point), radius, pen.color);
    }

    fn draw_dashed_rect(&mut self, bounds: Bounds, pen: &Pen) {
        let rect = self.rect_to_screen(bounds);
        let outline = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
            rect.left_top(),
        ];
        self.painter.extend(EguiShape::dashed_line(
            &outline,
            pen.to_egui(),
            DASH_LENGTH,
            DASH_GAP,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaintModel;
    use crate::command::CommandKind;

    #[test]
    fn test_to_screen_applies_origin() {
        let ctx = egui::Context::default();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        let surface = PainterSurface::new(&painter, egui::pos2(5.0, 7.0));

        assert_eq!(surface.to_screen(Point::new(1, 2)), egui::pos2(6.0, 9.0));
        let screen = surface.rect_to_screen(Bounds::from_corners(Point::new(0, 0), Point::new(10, 10)));
        assert_eq!(screen.min, egui::pos2(5.0, 7.0));
        assert_eq!(screen.max, egui::pos2(15.0, 17.0));
    }

    #[test]
    fn test_render_model_basics() {
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx, layer_id, rect);

        let mut model = PaintModel::new();
        for kind in [
            CommandKind::DrawLine,
            CommandKind::DrawRect,
            CommandKind::DrawEllipse,
            CommandKind::DrawPencil,
        ] {
            model.start_command(kind, Point::new(10, 10)).unwrap();
            model.update_command(Point::new(40, 30)).unwrap();
            model.finalize_command().unwrap();
        }
        model.select_shape_at(Point::new(20, 20));

        let mut surface = PainterSurface::new(&painter, rect.min);
        model.draw_shapes(&mut surface);
    }
}

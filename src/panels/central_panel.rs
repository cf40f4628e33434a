use egui::{Color32, InputState, Pos2, Response};

use crate::PaintApp;
use crate::geometry::Point;
use crate::input::InputEvent;
use crate::renderer::PainterSurface;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let origin = response.rect.min;
        painter.rect_filled(response.rect, 0.0, Color32::WHITE);

        let events = ui.input(|input| pointer_events(input, &response, origin));
        for event in events {
            let (model, controller) = app.model_and_controller();
            if let Err(err) = controller.handle(model, event) {
                log::warn!("Canvas input rejected: {}", err);
            }
        }

        let mut surface = PainterSurface::new(&painter, origin);
        app.model().draw_shapes(&mut surface);
    });
}

/// Translate this frame's primary-button activity into canvas events
fn pointer_events(input: &InputState, response: &Response, origin: Pos2) -> Vec<InputEvent> {
    let pointer = &input.pointer;
    let Some(pos) = pointer.interact_pos() else {
        return Vec::new();
    };
    let point = Point::from_pos2((pos - origin).to_pos2());

    let mut events = Vec::new();
    if pointer.primary_pressed() && response.hovered() {
        events.push(InputEvent::PointerDown(point));
    } else if pointer.primary_down() && pointer.is_moving() {
        events.push(InputEvent::PointerMove(point));
    }
    if pointer.primary_released() {
        events.push(InputEvent::PointerUp(point));
    }
    events
}

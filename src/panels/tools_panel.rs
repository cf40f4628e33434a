use egui::{Color32, Ui};

use crate::PaintApp;
use crate::command::CommandResult;
use crate::input::Tool;
use crate::style::MAX_PEN_WIDTH;

const PALETTE: [Color32; 10] = [
    Color32::BLACK,
    Color32::WHITE,
    Color32::GRAY,
    Color32::RED,
    Color32::from_rgb(255, 165, 0),
    Color32::YELLOW,
    Color32::GREEN,
    Color32::BLUE,
    Color32::LIGHT_BLUE,
    Color32::BROWN,
];

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.controller().tool();
            for tool in Tool::ALL {
                if ui.selectable_label(active_tool == tool, tool.name()).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    app.set_tool(tool);
                }
            }
            ui.separator();

            // Style section. A change also restyles the selected shape.
            ui.label("Pen colour");
            if let Some(color) = palette(ui, "pen_palette", app.model().pen_color()) {
                let model = app.model_mut();
                model.set_pen_color(color);
                report(model.request_set_pen_style());
            }

            ui.label("Pen width");
            let current_width = app.model().pen_width();
            let mut width = current_width;
            egui::ComboBox::from_id_salt("pen_width")
                .selected_text(width.to_string())
                .show_ui(ui, |ui| {
                    for w in 1..=MAX_PEN_WIDTH {
                        ui.selectable_value(&mut width, w, w.to_string());
                    }
                });
            if width != current_width {
                let model = app.model_mut();
                report(model.set_pen_width(width));
                report(model.request_set_pen_style());
            }

            ui.label("Brush colour");
            if let Some(color) = palette(ui, "brush_palette", app.model().brush_color()) {
                let model = app.model_mut();
                model.set_brush_color(color);
                report(model.request_set_brush_style());
            }
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.model().can_undo();
                let can_redo = app.model().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    report(app.model_mut().undo());
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    report(app.model_mut().redo());
                }
            });

            ui.horizontal(|ui| {
                let has_selection = app.model().selected().is_some();
                if ui.add_enabled(has_selection, egui::Button::new("Unselect")).clicked() {
                    app.model_mut().unselect();
                }
                if ui.add_enabled(has_selection, egui::Button::new("Delete")).clicked() {
                    report(app.model_mut().request_delete());
                }
            });

            if ui.button("New").clicked() {
                app.model_mut().reset();
            }
            ui.separator();

            let history = app.model().history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.undo_stack().len()));
                ui.label(format!("Redo stack size: {}", history.redo_stack().len()));
            });

            egui::Grid::new("command_history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Undo Stack");
                    ui.strong("Redo Stack");
                    ui.end_row();

                    let undo_stack = history.undo_stack();
                    let redo_stack = history.redo_stack();
                    let max_len = undo_stack.len().max(redo_stack.len());

                    for i in 0..max_len {
                        match undo_stack.get(i) {
                            Some(command) => ui.label(command.name()),
                            None => ui.label(""),
                        };
                        match redo_stack.get(i) {
                            Some(command) => ui.label(command.name()),
                            None => ui.label(""),
                        };
                        ui.end_row();
                    }
                });
        });
}

/// Row of colour swatches; returns the swatch clicked this frame
fn palette(ui: &mut Ui, id: &str, current: Color32) -> Option<Color32> {
    let mut picked = None;
    ui.push_id(id, |ui| {
        ui.horizontal_wrapped(|ui| {
            for color in PALETTE {
                let stroke_width = if color == current { 2.0 } else { 0.5 };
                let swatch = egui::Button::new("")
                    .fill(color)
                    .stroke(egui::Stroke::new(stroke_width, Color32::DARK_GRAY))
                    .min_size(egui::vec2(18.0, 18.0));
                if ui.add(swatch).clicked() && color != current {
                    picked = Some(color);
                }
            }
        });
    });
    picked
}

fn report(result: CommandResult) {
    if let Err(err) = result {
        log::warn!("Request rejected: {}", err);
    }
}

use log::debug;
use serde::{Deserialize, Serialize};

use crate::command::{CommandKind, CommandResult};
use crate::geometry::Point;
use crate::model::PaintModel;

/// Tools offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Selector,
    DrawLine,
    DrawRect,
    DrawEllipse,
    DrawPencil,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Selector,
        Tool::DrawLine,
        Tool::DrawRect,
        Tool::DrawEllipse,
        Tool::DrawPencil,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Selector => "Select",
            Tool::DrawLine => "Line",
            Tool::DrawRect => "Rectangle",
            Tool::DrawEllipse => "Ellipse",
            Tool::DrawPencil => "Pencil",
        }
    }

    /// The drawing command this tool starts, if it draws at all
    pub fn draw_command(&self) -> Option<CommandKind> {
        match self {
            Tool::Selector => None,
            Tool::DrawLine => Some(CommandKind::DrawLine),
            Tool::DrawRect => Some(CommandKind::DrawRect),
            Tool::DrawEllipse => Some(CommandKind::DrawEllipse),
            Tool::DrawPencil => Some(CommandKind::DrawPencil),
        }
    }
}

/// Pointer events in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
}

/// Maps pointer events on the canvas to model operations for the active tool.
#[derive(Debug, Default)]
pub struct CanvasController {
    tool: Tool,
}

impl CanvasController {
    pub fn new(tool: Tool) -> Self {
        Self { tool }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Apply one pointer event to the model.
    ///
    /// With the selector, pressing inside the selected shape's outline starts
    /// a move and pressing anywhere else selects. Drawing tools drop the
    /// selection and start the matching draw command. Release feeds the last
    /// position and finalizes whatever command is active.
    pub fn handle(&mut self, model: &mut PaintModel, event: InputEvent) -> CommandResult {
        match event {
            InputEvent::PointerDown(point) => {
                if model.has_active_command() {
                    debug!("Pointer down during an active gesture, ignoring");
                    return Ok(());
                }
                match self.tool.draw_command() {
                    Some(kind) => {
                        model.unselect();
                        model.start_command(kind, point)
                    }
                    None if model.hit_move_handle(point) => {
                        model.start_command(CommandKind::Move, point)
                    }
                    None => {
                        model.select_shape_at(point);
                        Ok(())
                    }
                }
            }
            InputEvent::PointerMove(point) => {
                if model.has_active_command() {
                    model.update_command(point)?;
                }
                Ok(())
            }
            InputEvent::PointerUp(point) => {
                if model.has_active_command() {
                    model.update_command(point)?;
                    model.finalize_command()?;
                }
                Ok(())
            }
        }
    }
}

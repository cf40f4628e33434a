mod commands;
mod history;

use thiserror::Error;

use crate::shape::{ShapeId, ShapeKind};

pub use commands::{Command, DeleteCommand, DrawCommand, MoveCommand, PenBrushCommand};
pub use history::{CommandHistory, DEFAULT_HISTORY_LIMIT};

/// Result type for command operations
pub type CommandResult<T = ()> = Result<T, CommandError>;

/// Errors that can occur while driving commands through the model.
///
/// None of these are fatal: the model is left exactly as it was before the
/// rejected call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A command is already in progress
    #[error("a {active} command is still in progress")]
    Busy { active: &'static str },

    /// Update or finalize requested while no command is in progress
    #[error("no command is in progress")]
    NotEditing,

    /// The command needs a selected shape and nothing is selected
    #[error("no shape is selected")]
    NoSelection,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    /// The referenced shape is not in the shape store
    #[error("unknown shape {0}")]
    UnknownShape(ShapeId),

    /// The command parameters are invalid
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// What a new command should do, chosen by the shell at gesture start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    DrawLine,
    DrawRect,
    DrawEllipse,
    DrawPencil,
    Move,
    Delete,
    SetPen,
    SetBrush,
}

impl CommandKind {
    /// The shape a drawing command creates, if this is one
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            CommandKind::DrawLine => Some(ShapeKind::Line),
            CommandKind::DrawRect => Some(ShapeKind::Rect),
            CommandKind::DrawEllipse => Some(ShapeKind::Ellipse),
            CommandKind::DrawPencil => Some(ShapeKind::Pencil),
            _ => None,
        }
    }
}

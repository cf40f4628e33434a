//! Gesture state of the editing model.
//!
//! ```text
//!          start_command
//!   ┌──────┐ ─────────────► ┌─────────┐
//!   │ Idle │                │ Editing │ ◄── update_command
//!   └──────┘ ◄───────────── └─────────┘
//!        finalize_command / cancel_command
//! ```
//!
//! The active command lives inside the `Editing` variant, so it cannot exist
//! while the model is idle and is never on the undo or redo stack at the same
//! time.
use crate::command::Command;

#[derive(Debug, Default)]
pub enum EditorState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A command has been started and not yet finalized
    Editing { command: Command },
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditorState::Editing { .. })
    }

    pub fn active_command(&self) -> Option<&Command> {
        match self {
            EditorState::Editing { command } => Some(command),
            EditorState::Idle => None,
        }
    }

    pub fn active_command_mut(&mut self) -> Option<&mut Command> {
        match self {
            EditorState::Editing { command } => Some(command),
            EditorState::Idle => None,
        }
    }

    /// Leave the editing state, handing back the active command
    pub fn take_command(&mut self) -> Option<Command> {
        match std::mem::take(self) {
            EditorState::Editing { command } => Some(command),
            EditorState::Idle => None,
        }
    }
}

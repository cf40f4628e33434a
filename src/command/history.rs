use log::{debug, info};

use super::{Command, CommandError, CommandResult};
use crate::document::Document;
use crate::shape::ShapeId;

/// Undo depth used when no configuration says otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Manages the history of executed commands for undo/redo functionality
#[derive(Debug)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Command>,
    /// Maximum number of undoable commands kept
    limit: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl CommandHistory {
    /// Creates a new empty command history holding at most `limit` undo steps
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Push a finalized command. Returns true if old entries were evicted.
    pub fn record(&mut self, command: Command) -> bool {
        self.undo_stack.push(command);
        self.redo_stack.clear();

        let overflow = self.undo_stack.len().saturating_sub(self.limit);
        if overflow > 0 {
            self.undo_stack.drain(..overflow);
            debug!("Evicted {} command(s) past the history limit", overflow);
        }
        overflow > 0
    }

    /// Drop everything that could be redone. Returns true if anything was dropped.
    pub fn clear_redo(&mut self) -> bool {
        if self.redo_stack.is_empty() {
            return false;
        }
        info!("Discarding {} redoable command(s)", self.redo_stack.len());
        self.redo_stack.clear();
        true
    }

    /// Undo the last executed command
    pub fn undo(&mut self, doc: &mut Document) -> CommandResult {
        let mut command = self.undo_stack.pop().ok_or(CommandError::NothingToUndo)?;
        if let Err(err) = command.undo(doc) {
            self.undo_stack.push(command);
            return Err(err);
        }
        debug!("Undid {} on {}", command.name(), command.shape_id());
        self.redo_stack.push(command);
        Ok(())
    }

    /// Redo the last undone command
    pub fn redo(&mut self, doc: &mut Document) -> CommandResult {
        let mut command = self.redo_stack.pop().ok_or(CommandError::NothingToRedo)?;
        if let Err(err) = command.redo(doc) {
            self.redo_stack.push(command);
            return Err(err);
        }
        debug!("Redid {} on {}", command.name(), command.shape_id());
        self.undo_stack.push(command);
        Ok(())
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Shapes referenced by any command on either stack
    pub fn referenced_shapes(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.undo_stack
            .iter()
            .chain(self.redo_stack.iter())
            .map(Command::shape_id)
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

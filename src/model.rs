use std::collections::HashSet;

use egui::Color32;
use log::{debug, info, warn};

use crate::command::{Command, CommandError, CommandHistory, CommandKind, CommandResult};
use crate::config::PaintConfig;
use crate::document::Document;
use crate::geometry::Point;
use crate::shape::{Shape, ShapeId, ShapeType};
use crate::state::EditorState;
use crate::style::{Brush, MAX_PEN_WIDTH, Pen};
use crate::surface::Surface;

/// The editing core: shapes, selection, the active gesture and undo history.
///
/// All mutation happens synchronously through `&mut self`. Operations that are
/// invalid in the current state return a [`CommandError`] and leave the model
/// untouched.
#[derive(Debug)]
pub struct PaintModel {
    document: Document,
    history: CommandHistory,
    state: EditorState,
    config: PaintConfig,
}

impl Default for PaintModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintModel {
    pub fn new() -> Self {
        Self::with_config(PaintConfig::default())
    }

    pub fn with_config(config: PaintConfig) -> Self {
        Self {
            document: Document::new(config.pen, config.brush),
            history: CommandHistory::new(config.history_limit),
            state: EditorState::Idle,
            config,
        }
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    // --- Gesture lifecycle -------------------------------------------------

    /// Begin a new command at `point`. Only valid while idle.
    ///
    /// Starting a command discards everything on the redo stack.
    pub fn start_command(&mut self, kind: CommandKind, point: Point) -> CommandResult {
        self.ensure_idle()?;
        let command = Command::create(&mut self.document, kind, point)?;
        debug!("Started {:?} at {:?}", kind, point);
        self.state = EditorState::Editing { command };
        if self.history.clear_redo() {
            self.collect_garbage();
        }
        Ok(())
    }

    /// Forward a pointer position to the active command
    pub fn update_command(&mut self, point: Point) -> CommandResult {
        let command = self
            .state
            .active_command_mut()
            .ok_or(CommandError::NotEditing)?;
        command.update(&mut self.document, point)
    }

    /// Finish the active command and push it onto the undo stack
    pub fn finalize_command(&mut self) -> CommandResult {
        let mut command = self.state.take_command().ok_or(CommandError::NotEditing)?;
        if let Err(err) = command.finalize(&mut self.document) {
            self.state = EditorState::Editing { command };
            return Err(err);
        }
        debug!(
            "Finalized {} command on {} ({:?} -> {:?})",
            command.name(),
            command.shape_id(),
            command.start(),
            command.last_point()
        );
        if self.history.record(command) {
            self.collect_garbage();
        }
        Ok(())
    }

    /// Abandon the active command, reverting whatever it already changed.
    pub fn cancel_command(&mut self) -> CommandResult {
        let mut command = self.state.take_command().ok_or(CommandError::NotEditing)?;
        command.cancel(&mut self.document)?;
        info!("Cancelled {} command", command.name());
        drop(command);
        self.collect_garbage();
        Ok(())
    }

    pub fn has_active_command(&self) -> bool {
        self.state.is_editing()
    }

    // --- History -----------------------------------------------------------

    pub fn undo(&mut self) -> CommandResult {
        self.ensure_idle()?;
        self.history.undo(&mut self.document)
    }

    pub fn redo(&mut self) -> CommandResult {
        self.ensure_idle()?;
        self.history.redo(&mut self.document)
    }

    pub fn can_undo(&self) -> bool {
        self.state.is_idle() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.is_idle() && self.history.can_redo()
    }

    /// Start over with an empty canvas, empty history and the configured style
    pub fn reset(&mut self) {
        self.state = EditorState::Idle;
        self.history.clear();
        self.document.clear(self.config.pen, self.config.brush);
        info!("Model reset");
    }

    // --- Selection ---------------------------------------------------------

    /// Select the topmost shape under `point`.
    ///
    /// A miss leaves the current selection as it was.
    pub fn select_shape_at(&mut self, point: Point) -> Option<ShapeId> {
        if let Some(id) = self.document.shape_at(point) {
            if self.document.select(id).is_ok() {
                debug!("Selected {}", id);
            }
        }
        self.document.selected()
    }

    pub fn unselect(&mut self) {
        self.document.unselect();
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.document.selected()
    }

    pub fn selected_shape(&self) -> Option<&ShapeType> {
        self.document.selected_shape()
    }

    /// Returns true if `point` lies on the selected shape's outline region
    pub fn hit_move_handle(&self, point: Point) -> bool {
        self.selected_shape()
            .is_some_and(|shape| shape.selection_rect().contains(point))
    }

    /// Delete the selection as one undoable step. No-op without a selection.
    pub fn request_delete(&mut self) -> CommandResult {
        self.run_on_selection(CommandKind::Delete)
    }

    /// Apply the default pen to the selection as one undoable step
    pub fn request_set_pen_style(&mut self) -> CommandResult {
        self.run_on_selection(CommandKind::SetPen)
    }

    /// Apply the default brush to the selection as one undoable step
    pub fn request_set_brush_style(&mut self) -> CommandResult {
        self.run_on_selection(CommandKind::SetBrush)
    }

    fn run_on_selection(&mut self, kind: CommandKind) -> CommandResult {
        self.ensure_idle()?;
        let Some(shape) = self.selected_shape() else {
            debug!("Ignoring {:?}: nothing selected", kind);
            return Ok(());
        };
        let anchor = shape.bounds().top_left;
        self.start_command(kind, anchor)?;
        self.finalize_command()
    }

    // --- Default style -----------------------------------------------------

    pub fn pen(&self) -> Pen {
        self.document.pen()
    }

    pub fn brush(&self) -> Brush {
        self.document.brush()
    }

    pub fn pen_color(&self) -> Color32 {
        self.document.pen().color
    }

    pub fn set_pen_color(&mut self, color: Color32) {
        let pen = Pen { color, ..self.document.pen() };
        self.document.set_pen(pen);
    }

    pub fn pen_width(&self) -> u32 {
        self.document.pen().width
    }

    pub fn set_pen_width(&mut self, width: u32) -> CommandResult {
        if !Pen::is_valid_width(width) {
            warn!("Rejected pen width {}", width);
            return Err(CommandError::InvalidParameters(format!(
                "pen width {} is outside 1..={}",
                width, MAX_PEN_WIDTH
            )));
        }
        let pen = Pen { width, ..self.document.pen() };
        self.document.set_pen(pen);
        Ok(())
    }

    pub fn brush_color(&self) -> Color32 {
        self.document.brush().color
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        self.document.set_brush(Brush::new(color));
    }

    // --- Rendering ---------------------------------------------------------

    /// Draw every shape back to front, then the selection outline on top
    pub fn draw_shapes(&self, surface: &mut dyn Surface) {
        for (_, shape) in self.document.shapes() {
            shape.draw(surface);
        }
        if let Some(shape) = self.selected_shape() {
            shape.draw_selection(surface);
        }
    }

    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = (ShapeId, &ShapeType)> + '_ {
        self.document.shapes()
    }

    pub fn shape(&self, id: ShapeId) -> Option<&ShapeType> {
        self.document.shape(id).ok()
    }

    fn ensure_idle(&self) -> CommandResult {
        match self.state.active_command() {
            Some(active) => {
                warn!("Rejected call while a {} command is active", active.name());
                Err(CommandError::Busy { active: active.name() })
            }
            None => Ok(()),
        }
    }

    /// Drop stored shapes that no placement, history entry or active command
    /// refers to any more
    fn collect_garbage(&mut self) {
        let mut referenced: HashSet<ShapeId> = self.history.referenced_shapes().collect();
        if let Some(active) = self.state.active_command() {
            referenced.insert(active.shape_id());
        }
        self.document.retain(|id| referenced.contains(&id));
    }
}

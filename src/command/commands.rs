use log::debug;

use super::{CommandError, CommandKind, CommandResult};
use crate::document::Document;
use crate::geometry::Point;
use crate::shape::{Shape, ShapeId, factory};
use crate::style::{Brush, Pen};

/// Adds a freshly drawn shape to the document.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    start: Point,
    end: Point,
    shape: ShapeId,
}

impl DrawCommand {
    fn update(&mut self, doc: &mut Document, point: Point) -> CommandResult {
        self.end = point;
        doc.shape_mut(self.shape)?.update(point);
        Ok(())
    }

    fn finalize(&mut self, doc: &mut Document) -> CommandResult {
        doc.shape_mut(self.shape)?.finalize();
        Ok(())
    }

    fn undo(&mut self, doc: &mut Document) -> CommandResult {
        doc.remove_shape(self.shape);
        Ok(())
    }

    fn redo(&mut self, doc: &mut Document) -> CommandResult {
        doc.add_shape(self.shape)
    }
}

/// Swaps a shape's pen and brush, together with the document defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct PenBrushCommand {
    start: Point,
    end: Point,
    shape: ShapeId,
    old_pen: Pen,
    new_pen: Pen,
    old_brush: Brush,
    new_brush: Brush,
}

impl PenBrushCommand {
    pub fn old_pen(&self) -> Pen {
        self.old_pen
    }

    pub fn new_pen(&self) -> Pen {
        self.new_pen
    }

    pub fn old_brush(&self) -> Brush {
        self.old_brush
    }

    pub fn new_brush(&self) -> Brush {
        self.new_brush
    }

    fn apply(&self, doc: &mut Document, pen: Pen, brush: Brush) -> CommandResult {
        let shape = doc.shape_mut(self.shape)?;
        shape.set_pen(pen);
        shape.set_brush(brush);
        doc.set_pen(pen);
        doc.set_brush(brush);
        Ok(())
    }

    fn finalize(&mut self, doc: &mut Document) -> CommandResult {
        doc.shape_mut(self.shape)?.finalize();
        Ok(())
    }

    /// Put the shape's own style back, leaving the document defaults alone
    fn revert_shape(&self, doc: &mut Document) -> CommandResult {
        let shape = doc.shape_mut(self.shape)?;
        shape.set_pen(self.old_pen);
        shape.set_brush(self.old_brush);
        Ok(())
    }

    fn undo(&mut self, doc: &mut Document) -> CommandResult {
        self.apply(doc, self.old_pen, self.old_brush)
    }

    fn redo(&mut self, doc: &mut Document) -> CommandResult {
        self.apply(doc, self.new_pen, self.new_brush)
    }
}

/// Takes a shape out of the document, remembering where it sat in z-order
/// and the style it had before the delete restyled it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCommand {
    start: Point,
    end: Point,
    shape: ShapeId,
    index: usize,
    old_pen: Pen,
    new_pen: Pen,
    old_brush: Brush,
    new_brush: Brush,
}

impl DeleteCommand {
    fn restyle(&self, doc: &mut Document, pen: Pen, brush: Brush) -> CommandResult {
        let shape = doc.shape_mut(self.shape)?;
        shape.set_pen(pen);
        shape.set_brush(brush);
        Ok(())
    }

    fn undo(&mut self, doc: &mut Document) -> CommandResult {
        self.restyle(doc, self.old_pen, self.old_brush)?;
        doc.insert_shape_at(self.shape, self.index)
    }

    fn redo(&mut self, doc: &mut Document) -> CommandResult {
        if let Some(index) = doc.remove_shape(self.shape) {
            self.index = index;
        }
        self.restyle(doc, self.new_pen, self.new_brush)
    }
}

/// Drags a shape by changing its positional offset.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveCommand {
    start: Point,
    end: Point,
    shape: ShapeId,
    old_offset: Point,
    new_offset: Point,
}

impl MoveCommand {
    pub fn old_offset(&self) -> Point {
        self.old_offset
    }

    pub fn new_offset(&self) -> Point {
        self.new_offset
    }

    fn update(&mut self, doc: &mut Document, point: Point) -> CommandResult {
        self.end = point;
        self.new_offset = self.old_offset.translate(point.offset_from(self.start));
        doc.shape_mut(self.shape)?.set_offset(self.new_offset);
        Ok(())
    }

    fn undo(&mut self, doc: &mut Document) -> CommandResult {
        doc.shape_mut(self.shape)?.set_offset(self.old_offset);
        Ok(())
    }

    fn redo(&mut self, doc: &mut Document) -> CommandResult {
        doc.shape_mut(self.shape)?.set_offset(self.new_offset);
        Ok(())
    }
}

/// Commands that can be executed against the document
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Draw(DrawCommand),
    PenBrush(PenBrushCommand),
    Delete(DeleteCommand),
    Move(MoveCommand),
}

impl Command {
    /// Build the command for `kind`, applying its immediate effect.
    ///
    /// Drawing commands insert their shape right away so it renders while the
    /// gesture is still running; delete removes the selection right away. The
    /// drawn or deleted shape also picks up the document's default pen and brush.
    pub fn create(doc: &mut Document, kind: CommandKind, start: Point) -> CommandResult<Command> {
        let command = match kind {
            CommandKind::DrawLine
            | CommandKind::DrawRect
            | CommandKind::DrawEllipse
            | CommandKind::DrawPencil => {
                let shape_kind = kind
                    .shape_kind()
                    .ok_or_else(|| CommandError::InvalidParameters(format!("{:?}", kind)))?;
                let mut created = factory::create_shape(shape_kind, start);
                created.set_pen(doc.pen());
                created.set_brush(doc.brush());
                let shape = doc.insert_new(created);
                doc.add_shape(shape)?;
                Command::Draw(DrawCommand {
                    start,
                    end: start,
                    shape,
                })
            }
            CommandKind::Delete => {
                let shape = doc.selected().ok_or(CommandError::NoSelection)?;
                let (new_pen, new_brush) = (doc.pen(), doc.brush());
                let target = doc.shape_mut(shape)?;
                let (old_pen, old_brush) = (target.pen(), target.brush());
                target.set_pen(new_pen);
                target.set_brush(new_brush);
                let index = doc
                    .remove_shape(shape)
                    .ok_or(CommandError::UnknownShape(shape))?;
                Command::Delete(DeleteCommand {
                    start,
                    end: start,
                    shape,
                    index,
                    old_pen,
                    new_pen,
                    old_brush,
                    new_brush,
                })
            }
            CommandKind::SetPen | CommandKind::SetBrush => {
                let shape = doc.selected().ok_or(CommandError::NoSelection)?;
                let (new_pen, new_brush) = (doc.pen(), doc.brush());
                let target = doc.shape_mut(shape)?;
                let (old_pen, old_brush) = (target.pen(), target.brush());
                target.set_pen(new_pen);
                target.set_brush(new_brush);
                Command::PenBrush(PenBrushCommand {
                    start,
                    end: start,
                    shape,
                    old_pen,
                    new_pen,
                    old_brush,
                    new_brush,
                })
            }
            CommandKind::Move => {
                let shape = doc.selected().ok_or(CommandError::NoSelection)?;
                let old_offset = doc.shape(shape)?.offset();
                Command::Move(MoveCommand {
                    start,
                    end: start,
                    shape,
                    old_offset,
                    new_offset: old_offset,
                })
            }
        };

        debug!("Created {} command for {}", command.name(), command.shape_id());
        Ok(command)
    }

    /// The shape this command operates on
    pub fn shape_id(&self) -> ShapeId {
        match self {
            Command::Draw(c) => c.shape,
            Command::PenBrush(c) => c.shape,
            Command::Delete(c) => c.shape,
            Command::Move(c) => c.shape,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Draw(_) => "draw",
            Command::PenBrush(_) => "pen/brush",
            Command::Delete(_) => "delete",
            Command::Move(_) => "move",
        }
    }

    /// Point where the gesture began
    pub fn start(&self) -> Point {
        match self {
            Command::Draw(c) => c.start,
            Command::PenBrush(c) => c.start,
            Command::Delete(c) => c.start,
            Command::Move(c) => c.start,
        }
    }

    /// Most recent point seen by `update`
    pub fn last_point(&self) -> Point {
        match self {
            Command::Draw(c) => c.end,
            Command::PenBrush(c) => c.end,
            Command::Delete(c) => c.end,
            Command::Move(c) => c.end,
        }
    }

    /// Feed the next pointer position of the gesture
    pub fn update(&mut self, doc: &mut Document, point: Point) -> CommandResult {
        match self {
            Command::Draw(c) => c.update(doc, point),
            Command::Move(c) => c.update(doc, point),
            Command::PenBrush(c) => {
                c.end = point;
                Ok(())
            }
            Command::Delete(c) => {
                c.end = point;
                Ok(())
            }
        }
    }

    /// Complete the gesture
    pub fn finalize(&mut self, doc: &mut Document) -> CommandResult {
        match self {
            Command::Draw(c) => c.finalize(doc),
            Command::PenBrush(c) => c.finalize(doc),
            Command::Delete(_) | Command::Move(_) => Ok(()),
        }
    }

    /// Reverse this command's effect
    pub fn undo(&mut self, doc: &mut Document) -> CommandResult {
        match self {
            Command::Draw(c) => c.undo(doc),
            Command::PenBrush(c) => c.undo(doc),
            Command::Delete(c) => c.undo(doc),
            Command::Move(c) => c.undo(doc),
        }
    }

    /// Revert only what [`Command::create`] changed, for a gesture that is
    /// abandoned before it is finalized
    pub fn cancel(&mut self, doc: &mut Document) -> CommandResult {
        match self {
            Command::PenBrush(c) => c.revert_shape(doc),
            Command::Draw(c) => c.undo(doc),
            Command::Delete(c) => c.undo(doc),
            Command::Move(c) => c.undo(doc),
        }
    }

    /// Re-apply this command's effect after an undo
    pub fn redo(&mut self, doc: &mut Document) -> CommandResult {
        match self {
            Command::Draw(c) => c.redo(doc),
            Command::PenBrush(c) => c.redo(doc),
            Command::Delete(c) => c.redo(doc),
            Command::Move(c) => c.redo(doc),
        }
    }
}

use std::collections::HashMap;

use log::debug;

use crate::command::{CommandError, CommandResult};
use crate::geometry::Point;
use crate::shape::{Shape, ShapeId, ShapeType};
use crate::style::{Brush, Pen};

/// The shapes being edited, their z-order, the selection and the default style.
///
/// Shapes live in a store keyed by [`ShapeId`]. A shape stays in the store
/// after it leaves the z-order list so commands on the undo/redo stacks can
/// bring it back; [`Document::retain`] reclaims the ones nothing refers to.
#[derive(Debug, Default)]
pub struct Document {
    store: HashMap<ShapeId, ShapeType>,
    /// Back-to-front rendering order
    order: Vec<ShapeId>,
    next_id: usize,
    selected: Option<ShapeId>,
    pen: Pen,
    brush: Brush,
}

impl Document {
    pub fn new(pen: Pen, brush: Brush) -> Self {
        Self {
            pen,
            brush,
            ..Self::default()
        }
    }

    /// Put a shape in the store without placing it on the canvas
    pub fn insert_new(&mut self, shape: ShapeType) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.store.insert(id, shape);
        id
    }

    /// Place a stored shape on top of all others
    pub fn add_shape(&mut self, id: ShapeId) -> CommandResult {
        let len = self.order.len();
        self.insert_shape_at(id, len)
    }

    /// Place a stored shape at `index` in z-order, clamped to the list length.
    pub fn insert_shape_at(&mut self, id: ShapeId, index: usize) -> CommandResult {
        if !self.store.contains_key(&id) {
            return Err(CommandError::UnknownShape(id));
        }
        if self.order.contains(&id) {
            debug!("{} is already placed", id);
            return Ok(());
        }
        let index = index.min(self.order.len());
        self.order.insert(index, id);
        Ok(())
    }

    /// Take a shape off the canvas, returning the z-order index it had.
    ///
    /// Removing the selected shape clears the selection.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<usize> {
        let index = self.order.iter().position(|s| *s == id)?;
        self.order.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(index)
    }

    /// Returns true if the shape is currently on the canvas
    pub fn contains(&self, id: ShapeId) -> bool {
        self.order.contains(&id)
    }

    pub fn shape(&self, id: ShapeId) -> CommandResult<&ShapeType> {
        self.store.get(&id).ok_or(CommandError::UnknownShape(id))
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> CommandResult<&mut ShapeType> {
        self.store.get_mut(&id).ok_or(CommandError::UnknownShape(id))
    }

    /// Placed shapes, back to front
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = (ShapeId, &ShapeType)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.store.get(id).map(|shape| (*id, shape)))
    }

    pub fn shape_ids(&self) -> Vec<ShapeId> {
        self.order.clone()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of shapes held in the store, placed or not
    pub fn stored_len(&self) -> usize {
        self.store.len()
    }

    /// Topmost placed shape whose bounds contain `point`
    pub fn shape_at(&self, point: Point) -> Option<ShapeId> {
        self.shapes()
            .rev()
            .find(|(_, shape)| shape.hit_test(point))
            .map(|(id, _)| id)
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&ShapeType> {
        self.selected.and_then(|id| self.store.get(&id))
    }

    /// Select a placed shape.
    pub fn select(&mut self, id: ShapeId) -> CommandResult {
        if !self.contains(id) {
            return Err(CommandError::UnknownShape(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn unselect(&mut self) {
        self.selected = None;
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    pub fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    /// Drop stored shapes that are off the canvas and rejected by `keep`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(ShapeId) -> bool,
    {
        let order = &self.order;
        let before = self.store.len();
        self.store.retain(|id, _| order.contains(id) || keep(*id));
        let dropped = before - self.store.len();
        if dropped > 0 {
            debug!("Reclaimed {} unreferenced shape(s)", dropped);
        }
    }

    /// Remove every shape and restore the given default style
    pub fn clear(&mut self, pen: Pen, brush: Brush) {
        self.store.clear();
        self.order.clear();
        self.selected = None;
        self.pen = pen;
        self.brush = brush;
    }
}

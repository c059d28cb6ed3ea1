// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree interface a drag engine drives.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::{
    BlockId, Category, Element, InputWidget, MutationError, PointContent, PointId, PointKind,
    Region,
};

/// Structural queries and mutations over a block script.
///
/// The drag engine never stores the script itself. It reads the tree through
/// the query half of this trait and requests changes through the mutation
/// half. [`Script`](crate::Script) is the in-memory implementation; hosts
/// with their own view tree can implement this directly.
///
/// Mutations must be atomic: either the full change is applied and `Ok` is
/// returned, or nothing changes and a [`MutationError`] is returned.
pub trait ScriptTree {
    /// Category of a live block.
    fn category(&self, block: BlockId) -> Option<Category>;

    /// Region of the tree root that `block` belongs to.
    fn region(&self, block: BlockId) -> Option<Region>;

    /// The nearest draggable block enclosing `element`, if any.
    ///
    /// Editable inputs and the background never yield a block.
    fn draggable_at(&self, element: &Element) -> Option<BlockId>;

    /// Collect every attachment point on the canvas in tree order.
    ///
    /// The `out` buffer is cleared first.
    fn canvas_points(&self, out: &mut Vec<PointId>);

    /// Kind of a live point.
    fn point_kind(&self, point: PointId) -> Option<PointKind>;

    /// Current content of a live point.
    fn point_content(&self, point: PointId) -> Option<&PointContent>;

    /// Block that owns `point`.
    fn point_owner(&self, point: PointId) -> Option<BlockId>;

    /// The point `block` is attached to, if it is not a root.
    fn parent_point(&self, block: BlockId) -> Option<PointId>;

    /// Collect `block` and all of its descendants. The `out` buffer is cleared first.
    fn subtree(&self, block: BlockId, out: &mut Vec<BlockId>);

    /// Deep-copy `template` into the floating layer at the same position.
    fn clone_block(&mut self, template: BlockId) -> Result<BlockId, MutationError>;

    /// Remove `block` from its parent point (or root layer) into the floating
    /// layer, keeping its position.
    ///
    /// A vacated socket gets a fresh [`InputWidget::default_for`] widget,
    /// not the literal it showed before the block was plugged in. Hosts that
    /// want the old text back should keep the widget returned by
    /// [`insert_into_socket`](Self::insert_into_socket).
    fn detach(&mut self, block: BlockId) -> Result<(), MutationError>;

    /// Attach a step `block` at `slot`, pushing any current occupant to the
    /// tail of the inserted chain.
    fn insert_into_slot(&mut self, slot: PointId, block: BlockId) -> Result<(), MutationError>;

    /// Plug a value `block` into `socket`, returning the input widget it replaced.
    fn insert_into_socket(
        &mut self,
        socket: PointId,
        block: BlockId,
    ) -> Result<Option<InputWidget>, MutationError>;

    /// Make `block` a free-floating canvas root with its top-left at `position`.
    fn move_to_free_canvas(&mut self, block: BlockId, position: Point) -> Result<(), MutationError>;

    /// Destroy `block` and all of its descendants. Returns how many blocks were removed.
    fn discard(&mut self, block: BlockId) -> Result<usize, MutationError>;

    /// Move `block` and its descendants by `delta`.
    fn translate(&mut self, block: BlockId, delta: Vec2) -> Result<(), MutationError>;
}

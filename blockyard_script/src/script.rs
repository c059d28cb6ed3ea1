// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory block script with stored geometry.

use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use blockyard_geometry::{SurfaceQuery, Zone, Zones};
use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::arena::Arena;
use crate::{
    BlockId, Category, Element, InputWidget, MutationError, PointContent, PointId, PointKind,
    Region, ScriptTree,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Home {
    Root(Region),
    Attached(PointId),
}

#[derive(Clone, Debug)]
struct BlockData {
    category: Category,
    home: Home,
    origin: Point,
    size: Size,
    points: SmallVec<[PointId; 4]>,
}

#[derive(Clone, Debug)]
struct PointData {
    owner: BlockId,
    kind: PointKind,
    /// Bounds relative to the owner's top-left corner.
    offset: Rect,
    content: PointContent,
}

/// An in-memory block script: palette templates, canvas scripts, and the
/// floating drag layer.
///
/// Geometry is stored, not computed: each block has a world-space origin and
/// size, and each attachment point has bounds relative to its owner. Attaching
/// a block snaps its origin to the point's origin; everything else about layout
/// is left to whoever renders the script.
///
/// ## Example
///
/// ```rust
/// use blockyard_geometry::Zones;
/// use blockyard_script::{Category, PointKind, Script, ScriptTree};
/// use kurbo::{Point, Rect, Size};
///
/// let mut script = Script::new(Zones::default());
/// let first = script.add_block(Category::Step, Point::new(200.0, 20.0), Size::new(100.0, 20.0));
/// let next = script
///     .add_point(first, PointKind::Next, Rect::new(0.0, 20.0, 100.0, 30.0))
///     .unwrap();
///
/// let second = script.add_block(Category::Step, Point::new(400.0, 400.0), Size::new(100.0, 20.0));
/// script.insert_into_slot(next, second).unwrap();
///
/// assert_eq!(script.parent_point(second), Some(next));
/// assert_eq!(script.origin(second), Some(Point::new(200.0, 40.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Script {
    blocks: Arena<BlockData>,
    points: Arena<PointData>,
    roots: Vec<BlockId>,
    zones: Zones,
}

impl Script {
    /// Creates an empty script with the given palette and canvas bounds.
    #[must_use]
    pub fn new(zones: Zones) -> Self {
        Self {
            zones,
            ..Self::default()
        }
    }

    /// Palette and canvas bounds.
    #[must_use]
    pub fn zones(&self) -> Zones {
        self.zones
    }

    /// Replace the palette and canvas bounds, e.g. after a window resize.
    pub fn set_zones(&mut self, zones: Zones) {
        self.zones = zones;
    }

    /// Add a palette template.
    pub fn add_template(&mut self, category: Category, origin: Point, size: Size) -> BlockId {
        self.add_root(category, Region::Palette, origin, size)
    }

    /// Add a free-floating canvas block.
    pub fn add_block(&mut self, category: Category, origin: Point, size: Size) -> BlockId {
        self.add_root(category, Region::Canvas, origin, size)
    }

    fn add_root(
        &mut self,
        category: Category,
        region: Region,
        origin: Point,
        size: Size,
    ) -> BlockId {
        let (idx, generation) = self.blocks.insert(BlockData {
            category,
            home: Home::Root(region),
            origin,
            size,
            points: SmallVec::new(),
        });
        let id = BlockId::new(idx, generation);
        self.roots.push(id);
        id
    }

    /// Add an attachment point to `owner`, with `offset` relative to the
    /// owner's top-left corner.
    ///
    /// `Next` slots belong to steps only (one per block), `Contained` slots to
    /// steps and other blocks, and sockets to anything. A socket starts out
    /// holding a default [`InputWidget`].
    pub fn add_point(
        &mut self,
        owner: BlockId,
        kind: PointKind,
        offset: Rect,
    ) -> Result<PointId, MutationError> {
        let data = self.block(owner)?;
        let allowed = match kind {
            PointKind::Next => data.category == Category::Step,
            PointKind::Contained => matches!(data.category, Category::Step | Category::Other),
            PointKind::Socket(_) => true,
        };
        if !allowed {
            return Err(MutationError::InvalidPoint {
                category: data.category,
                kind,
            });
        }
        if kind == PointKind::Next && self.next_point(owner).is_some() {
            return Err(MutationError::DuplicateNext(owner));
        }
        let content = match kind {
            PointKind::Socket(ty) => PointContent::Input(InputWidget::default_for(ty)),
            PointKind::Next | PointKind::Contained => PointContent::Empty,
        };
        let (idx, generation) = self.points.insert(PointData {
            owner,
            kind,
            offset,
            content,
        });
        let id = PointId::new(idx, generation);
        self.block_mut(owner)?.points.push(id);
        Ok(id)
    }

    /// Returns `true` if `block` refers to a live block.
    #[must_use]
    pub fn is_alive(&self, block: BlockId) -> bool {
        self.blocks.get(block.idx(), block.1).is_some()
    }

    /// Returns `true` if `point` refers to a live attachment point.
    #[must_use]
    pub fn is_point_alive(&self, point: PointId) -> bool {
        self.points.get(point.idx(), point.1).is_some()
    }

    /// Number of live blocks across all regions.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Top-left corner of `block`.
    #[must_use]
    pub fn origin(&self, block: BlockId) -> Option<Point> {
        self.block(block).ok().map(|b| b.origin)
    }

    /// Attachment points owned by `block`, in declaration order.
    #[must_use]
    pub fn points(&self, block: BlockId) -> &[PointId] {
        match self.block(block) {
            Ok(data) => &data.points,
            Err(_) => &[],
        }
    }

    /// The `Next` slot of `block`, if it has one.
    #[must_use]
    pub fn next_point(&self, block: BlockId) -> Option<PointId> {
        self.points(block).iter().copied().find(|p| {
            self.point(*p)
                .is_ok_and(|data| data.kind == PointKind::Next)
        })
    }

    /// World-space bounds of `point`.
    #[must_use]
    pub fn point_rect(&self, point: PointId) -> Option<Rect> {
        let data = self.point(point).ok()?;
        let owner = self.block(data.owner).ok()?;
        Some(data.offset + owner.origin.to_vec2())
    }

    /// Root blocks of `region`, in the order they became roots.
    pub fn roots(&self, region: Region) -> impl Iterator<Item = BlockId> + '_ {
        self.roots
            .iter()
            .copied()
            .filter(move |b| self.block(*b).is_ok_and(|d| d.home == Home::Root(region)))
    }

    fn block(&self, id: BlockId) -> Result<&BlockData, MutationError> {
        self.blocks
            .get(id.idx(), id.1)
            .ok_or(MutationError::StaleBlock(id))
    }

    fn block_mut(&mut self, id: BlockId) -> Result<&mut BlockData, MutationError> {
        self.blocks
            .get_mut(id.idx(), id.1)
            .ok_or(MutationError::StaleBlock(id))
    }

    fn point(&self, id: PointId) -> Result<&PointData, MutationError> {
        self.points
            .get(id.idx(), id.1)
            .ok_or(MutationError::StalePoint(id))
    }

    fn point_mut(&mut self, id: PointId) -> Result<&mut PointData, MutationError> {
        self.points
            .get_mut(id.idx(), id.1)
            .ok_or(MutationError::StalePoint(id))
    }

    /// Root of the tree containing `block`, with its region.
    fn root_of(&self, block: BlockId) -> Result<(BlockId, Region), MutationError> {
        let mut current = block;
        loop {
            match self.block(current)?.home {
                Home::Root(region) => return Ok((current, region)),
                Home::Attached(point) => current = self.point(point)?.owner,
            }
        }
    }

    /// Returns `true` if `block` is `ancestor` or lies beneath it.
    fn is_within(&self, ancestor: BlockId, block: BlockId) -> bool {
        let mut current = block;
        loop {
            if current == ancestor {
                return true;
            }
            let Ok(data) = self.block(current) else {
                return false;
            };
            match data.home {
                Home::Root(_) => return false,
                Home::Attached(point) => match self.point(point) {
                    Ok(p) => current = p.owner,
                    Err(_) => return false,
                },
            }
        }
    }

    /// Checks shared by both insert paths: the block is a loose non-template
    /// root, the point is not on a template, and no cycle would form.
    fn check_insertable(&self, point: PointId, block: BlockId) -> Result<(), MutationError> {
        let owner = self.point(point)?.owner;
        match self.block(block)?.home {
            Home::Root(Region::Palette) => return Err(MutationError::Template(block)),
            Home::Attached(_) => return Err(MutationError::AlreadyAttached(block)),
            Home::Root(Region::Canvas | Region::Floating) => {}
        }
        let (owner_root, region) = self.root_of(owner)?;
        if region == Region::Palette {
            return Err(MutationError::Template(owner_root));
        }
        if self.is_within(block, owner) {
            return Err(MutationError::Cycle { block, point });
        }
        Ok(())
    }

    /// First free `Next` slot at the end of the chain starting at `block`.
    fn chain_tail(&self, block: BlockId) -> Result<PointId, MutationError> {
        let mut current = block;
        loop {
            let next = self
                .next_point(current)
                .ok_or(MutationError::NoChainTail(block))?;
            match self.point(next)?.content {
                PointContent::Block(following) => current = following,
                PointContent::Empty | PointContent::Input(_) => return Ok(next),
            }
        }
    }

    /// Reset `point` to its unoccupied state.
    fn vacate(&mut self, point: PointId) -> Result<(), MutationError> {
        let data = self.point_mut(point)?;
        data.content = match data.kind {
            PointKind::Socket(ty) => PointContent::Input(InputWidget::default_for(ty)),
            PointKind::Next | PointKind::Contained => PointContent::Empty,
        };
        Ok(())
    }

    /// Record `block` as the occupant of `point`. Validation is the caller's job.
    fn attach(&mut self, block: BlockId, point: PointId) -> Result<PointContent, MutationError> {
        let previous = mem::replace(
            &mut self.point_mut(point)?.content,
            PointContent::Block(block),
        );
        self.block_mut(block)?.home = Home::Attached(point);
        self.roots.retain(|r| *r != block);
        self.snap(block, point)?;
        Ok(previous)
    }

    fn make_root(&mut self, block: BlockId, region: Region) -> Result<(), MutationError> {
        self.block_mut(block)?.home = Home::Root(region);
        if !self.roots.contains(&block) {
            self.roots.push(block);
        }
        Ok(())
    }

    /// Move `block` so its origin matches the origin of `point`.
    fn snap(&mut self, block: BlockId, point: PointId) -> Result<(), MutationError> {
        let target = self
            .point_rect(point)
            .ok_or(MutationError::StalePoint(point))?
            .origin();
        let delta = target - self.block(block)?.origin;
        self.translate_subtree(block, delta);
        Ok(())
    }

    fn translate_subtree(&mut self, block: BlockId, delta: Vec2) {
        let mut members = Vec::new();
        self.subtree(block, &mut members);
        for id in members {
            if let Ok(data) = self.block_mut(id) {
                data.origin += delta;
            }
        }
    }
}

impl ScriptTree for Script {
    fn category(&self, block: BlockId) -> Option<Category> {
        self.block(block).ok().map(|b| b.category)
    }

    fn region(&self, block: BlockId) -> Option<Region> {
        self.root_of(block).ok().map(|(_, region)| region)
    }

    fn draggable_at(&self, element: &Element) -> Option<BlockId> {
        match *element {
            Element::Block(block) => self.is_alive(block).then_some(block),
            Element::Point(point) => self.point_owner(point),
            Element::Input(_) | Element::Background => None,
        }
    }

    fn canvas_points(&self, out: &mut Vec<PointId>) {
        out.clear();
        let mut stack: Vec<PointId> = Vec::new();
        for root in self.roots(Region::Canvas) {
            stack.extend(self.points(root).iter().rev().copied());
            while let Some(point) = stack.pop() {
                out.push(point);
                if let Ok(PointContent::Block(child)) = self.point(point).map(|p| &p.content) {
                    stack.extend(self.points(*child).iter().rev().copied());
                }
            }
        }
    }

    fn point_kind(&self, point: PointId) -> Option<PointKind> {
        self.point(point).ok().map(|p| p.kind)
    }

    fn point_content(&self, point: PointId) -> Option<&PointContent> {
        self.point(point).ok().map(|p| &p.content)
    }

    fn point_owner(&self, point: PointId) -> Option<BlockId> {
        self.point(point).ok().map(|p| p.owner)
    }

    fn parent_point(&self, block: BlockId) -> Option<PointId> {
        match self.block(block).ok()?.home {
            Home::Attached(point) => Some(point),
            Home::Root(_) => None,
        }
    }

    fn subtree(&self, block: BlockId, out: &mut Vec<BlockId>) {
        out.clear();
        if !self.is_alive(block) {
            return;
        }
        let mut stack = vec![block];
        while let Some(id) = stack.pop() {
            out.push(id);
            for point in self.points(id) {
                if let Some(child) = self.point_content(*point).and_then(PointContent::block) {
                    stack.push(child);
                }
            }
        }
    }

    fn clone_block(&mut self, template: BlockId) -> Result<BlockId, MutationError> {
        self.block(template)?;
        let mut root = None;
        let mut stack = vec![(template, Home::Root(Region::Floating))];
        while let Some((source, home)) = stack.pop() {
            let (category, origin, size, source_points) = {
                let data = self.block(source)?;
                (data.category, data.origin, data.size, data.points.clone())
            };
            let (idx, generation) = self.blocks.insert(BlockData {
                category,
                home,
                origin,
                size,
                points: SmallVec::new(),
            });
            let copy = BlockId::new(idx, generation);
            match home {
                Home::Attached(point) => self.point_mut(point)?.content = PointContent::Block(copy),
                Home::Root(_) => root = Some(copy),
            }
            for source_point in source_points {
                let (kind, offset, content) = {
                    let data = self.point(source_point)?;
                    (data.kind, data.offset, data.content.clone())
                };
                let child = content.block();
                let content = if child.is_some() {
                    PointContent::Empty
                } else {
                    content
                };
                let (idx, generation) = self.points.insert(PointData {
                    owner: copy,
                    kind,
                    offset,
                    content,
                });
                let point = PointId::new(idx, generation);
                self.block_mut(copy)?.points.push(point);
                if let Some(child) = child {
                    stack.push((child, Home::Attached(point)));
                }
            }
        }
        let root = root.ok_or(MutationError::StaleBlock(template))?;
        self.roots.push(root);
        tracing::trace!(?template, clone = ?root, "cloned block");
        Ok(root)
    }

    fn detach(&mut self, block: BlockId) -> Result<(), MutationError> {
        let (_, region) = self.root_of(block)?;
        if region == Region::Palette {
            return Err(MutationError::Template(block));
        }
        let home = self.block(block)?.home;
        if let Home::Attached(point) = home {
            self.vacate(point)?;
            tracing::trace!(?block, ?point, "detached block");
        }
        self.make_root(block, Region::Floating)
    }

    fn insert_into_slot(&mut self, slot: PointId, block: BlockId) -> Result<(), MutationError> {
        self.check_insertable(slot, block)?;
        let (kind, displaced) = {
            let data = self.point(slot)?;
            (data.kind, data.content.block())
        };
        let category = self.block(block)?.category;
        if !kind.is_slot() || category != Category::Step {
            return Err(MutationError::Incompatible { category, kind });
        }
        let tail = match displaced {
            Some(_) => Some(self.chain_tail(block)?),
            None => None,
        };

        self.attach(block, slot)?;
        if let (Some(displaced), Some(tail)) = (displaced, tail) {
            self.attach(displaced, tail)?;
        }
        tracing::trace!(?block, ?slot, ?displaced, "inserted into slot");
        Ok(())
    }

    fn insert_into_socket(
        &mut self,
        socket: PointId,
        block: BlockId,
    ) -> Result<Option<InputWidget>, MutationError> {
        self.check_insertable(socket, block)?;
        let category = self.block(block)?.category;
        let data = self.point(socket)?;
        let kind = data.kind;
        let compatible = match kind {
            PointKind::Socket(ty) => category.value_type() == Some(ty),
            PointKind::Next | PointKind::Contained => false,
        };
        if !compatible {
            return Err(MutationError::Incompatible { category, kind });
        }
        if matches!(data.content, PointContent::Block(_)) {
            return Err(MutationError::Occupied(socket));
        }

        let ejected = match self.attach(block, socket)? {
            PointContent::Input(widget) => Some(widget),
            PointContent::Empty | PointContent::Block(_) => None,
        };
        tracing::trace!(?block, ?socket, "inserted into socket");
        Ok(ejected)
    }

    fn move_to_free_canvas(
        &mut self,
        block: BlockId,
        position: Point,
    ) -> Result<(), MutationError> {
        let (_, region) = self.root_of(block)?;
        if region == Region::Palette {
            return Err(MutationError::Template(block));
        }
        let data = self.block(block)?;
        let home = data.home;
        let delta = position - data.origin;
        if let Home::Attached(point) = home {
            self.vacate(point)?;
        }
        self.make_root(block, Region::Canvas)?;
        self.translate_subtree(block, delta);
        tracing::trace!(?block, ?position, "moved block to canvas");
        Ok(())
    }

    fn discard(&mut self, block: BlockId) -> Result<usize, MutationError> {
        let (_, region) = self.root_of(block)?;
        if region == Region::Palette {
            return Err(MutationError::Template(block));
        }
        let home = self.block(block)?.home;
        if let Home::Attached(point) = home {
            self.vacate(point)?;
        }
        self.roots.retain(|r| *r != block);

        let mut members = Vec::new();
        self.subtree(block, &mut members);
        for id in &members {
            if let Some(data) = self.blocks.remove(id.idx(), id.1) {
                for point in data.points {
                    self.points.remove(point.idx(), point.1);
                }
            }
        }
        tracing::trace!(?block, removed = members.len(), "discarded block");
        Ok(members.len())
    }

    fn translate(&mut self, block: BlockId, delta: Vec2) -> Result<(), MutationError> {
        self.block(block)?;
        self.translate_subtree(block, delta);
        Ok(())
    }
}

impl SurfaceQuery<Element> for Script {
    fn position(&self, element: &Element) -> Option<Point> {
        match *element {
            Element::Block(block) => self.origin(block),
            Element::Point(point) => self.point_rect(point).map(|r| r.origin()),
            Element::Input(point) => match self.point_content(point)? {
                PointContent::Input(_) => self.point_rect(point).map(|r| r.origin()),
                PointContent::Empty | PointContent::Block(_) => None,
            },
            Element::Background => None,
        }
    }

    fn size(&self, element: &Element) -> Option<Size> {
        match *element {
            Element::Block(block) => self.block(block).ok().map(|b| b.size),
            Element::Point(point) => self.point_rect(point).map(|r| r.size()),
            Element::Input(point) => match self.point_content(point)? {
                PointContent::Input(_) => self.point_rect(point).map(|r| r.size()),
                PointContent::Empty | PointContent::Block(_) => None,
            },
            Element::Background => None,
        }
    }

    fn zone_at(&self, point: Point) -> Zone {
        self.zones.zone_at(point)
    }
}

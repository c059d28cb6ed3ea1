// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The in-flight drag: dragged block, origin, frozen candidates, and winner.

use alloc::boxed::Box;
use alloc::vec::Vec;

use blockyard_geometry::{SurfaceQuery, best_overlap, rect_of};
use blockyard_script::{BlockId, Element, PointId};
use kurbo::{Point, Rect, Vec2};

/// Where a drag state machine currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No press is being tracked.
    Idle,
    /// A block was pressed; waiting for the pointer to move.
    Armed,
    /// A block is following the pointer.
    Dragging,
}

/// Where the dragged block came from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Origin {
    /// Top-left corner of the block when it was pressed.
    pub position: Point,
    /// The point it was attached to, if any.
    pub parent: Option<PointId>,
}

/// Drop targets and their rectangles, captured once when a block is pressed.
///
/// Both lists have the same length and order. Targets without geometry are
/// left out when capturing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Candidates {
    points: Box<[PointId]>,
    rects: Box<[Rect]>,
}

impl Candidates {
    /// Snapshot the current rectangle of each target.
    pub fn capture<S, I>(surface: &S, targets: I) -> Self
    where
        S: SurfaceQuery<Element> + ?Sized,
        I: IntoIterator<Item = PointId>,
    {
        let (points, rects): (Vec<_>, Vec<_>) = targets
            .into_iter()
            .filter_map(|point| rect_of(surface, &Element::Point(point)).map(|rect| (point, rect)))
            .unzip();
        Self {
            points: points.into_boxed_slice(),
            rects: rects.into_boxed_slice(),
        }
    }

    /// Candidate points in capture order.
    #[must_use]
    pub fn points(&self) -> &[PointId] {
        &self.points
    }

    /// Candidate rectangles, parallel to [`points`](Self::points).
    #[must_use]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The single drag in flight.
#[derive(Clone, Debug)]
pub struct DragSession {
    dragged: BlockId,
    origin: Origin,
    is_clone: bool,
    candidates: Candidates,
    winning: Option<usize>,
    pointer: Point,
}

impl DragSession {
    pub(crate) fn new(
        dragged: BlockId,
        origin: Origin,
        is_clone: bool,
        candidates: Candidates,
        pointer: Point,
    ) -> Self {
        Self {
            dragged,
            origin,
            is_clone,
            candidates,
            winning: None,
            pointer,
        }
    }

    /// The block following the pointer. For palette drags this is the clone.
    #[must_use]
    pub fn dragged(&self) -> BlockId {
        self.dragged
    }

    /// Where the pressed block was before the drag started.
    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Returns `true` if the dragged block is a fresh copy of a palette template.
    #[must_use]
    pub fn is_clone(&self) -> bool {
        self.is_clone
    }

    /// Frozen drop candidates.
    #[must_use]
    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }

    /// Index of the winning candidate at the last hit-test.
    #[must_use]
    pub fn winning_index(&self) -> Option<usize> {
        self.winning
    }

    /// The winning point at the last hit-test.
    #[must_use]
    pub fn winning(&self) -> Option<PointId> {
        self.winning
            .and_then(|idx| self.candidates.points.get(idx).copied())
    }

    /// Last pointer position applied to the dragged block.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Record a new pointer position and return how far it moved.
    pub(crate) fn advance(&mut self, position: Point) -> Vec2 {
        let delta = position - self.pointer;
        self.pointer = position;
        delta
    }

    /// Score `probe` against the candidates and store the winner.
    ///
    /// Returns the previous winner if it changed.
    pub(crate) fn hit_test(&mut self, probe: Option<Rect>) -> Option<Option<PointId>> {
        let previous = self.winning;
        self.winning = probe
            .and_then(|probe| best_overlap(&probe, &self.candidates.rects))
            .map(|(idx, _)| idx);
        (self.winning != previous)
            .then(|| previous.and_then(|idx| self.candidates.points.get(idx).copied()))
    }
}

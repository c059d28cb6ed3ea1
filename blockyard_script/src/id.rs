// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational handles for blocks and attachment points.

use core::fmt;

/// Identifier for a block in a [`Script`](crate::Script).
///
/// A small, copyable handle made of a slot index and a generation counter.
/// A fresh slot starts at generation `1`; reusing a freed slot bumps the
/// generation, so a handle to a discarded block never aliases a later one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub(crate) u32, pub(crate) u32);

/// Identifier for an attachment point (slot or socket).
///
/// Same semantics as [`BlockId`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PointId(pub(crate) u32, pub(crate) u32);

impl BlockId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

impl PointId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({}v{})", self.0, self.1)
    }
}

impl fmt::Debug for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PointId({}v{})", self.0, self.1)
    }
}

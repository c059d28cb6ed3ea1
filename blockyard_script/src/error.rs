// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{BlockId, Category, PointId, PointKind};

/// A structural mutation that was rejected.
///
/// Mutations validate before writing, so a returned error means the script
/// is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MutationError {
    /// The block handle is stale or was never issued.
    #[error("block {0:?} is not alive")]
    StaleBlock(BlockId),
    /// The point handle is stale or was never issued.
    #[error("attachment point {0:?} is not alive")]
    StalePoint(PointId),
    /// Palette templates can only be cloned.
    #[error("block {0:?} is a palette template")]
    Template(BlockId),
    /// The block is attached somewhere and must be detached first.
    #[error("block {0:?} is already attached")]
    AlreadyAttached(BlockId),
    /// The block's category does not fit the point.
    #[error("{category:?} block cannot attach to a {kind:?} point")]
    Incompatible {
        /// Category of the block being inserted.
        category: Category,
        /// Kind of the target point.
        kind: PointKind,
    },
    /// The socket already holds a block.
    #[error("socket {0:?} is occupied")]
    Occupied(PointId),
    /// The point belongs to the block being inserted or one of its descendants.
    #[error("inserting {block:?} into {point:?} would create a cycle")]
    Cycle {
        /// Block being inserted.
        block: BlockId,
        /// Target point.
        point: PointId,
    },
    /// The inserted chain has no free `Next` slot to carry the displaced chain.
    #[error("chain starting at {0:?} has no free next slot")]
    NoChainTail(BlockId),
    /// A block can have at most one `Next` slot.
    #[error("block {0:?} already has a next slot")]
    DuplicateNext(BlockId),
    /// Only steps chain through `Next`; value blocks carry no slots.
    #[error("a {category:?} block cannot own a {kind:?} point")]
    InvalidPoint {
        /// Category of the owning block.
        category: Category,
        /// Kind of the rejected point.
        kind: PointKind,
    },
}

// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use blockyard_script::{BlockId, MutationError};

/// A drag transition that could not be completed.
///
/// Every error leaves the controller idle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    /// The script rejected a clone, detach, insert, move, or discard.
    ///
    /// `block` is the block the drag was acting on: the pressed block if it
    /// could not be lifted, otherwise the dragged block. After a failed drop
    /// it is still in [`Region::Floating`](blockyard_script::Region::Floating)
    /// for the host to recover.
    #[error("structural mutation failed on {block:?}")]
    StructuralMutationFailed {
        /// The block the failed mutation was applied to.
        block: BlockId,
        /// What the script reported.
        #[source]
        source: MutationError,
    },
}

impl DragError {
    pub(crate) fn mutation(block: BlockId, source: MutationError) -> Self {
        Self::StructuralMutationFailed { block, source }
    }

    /// The block the failed transition was acting on.
    #[must_use]
    pub fn block(&self) -> BlockId {
        match self {
            Self::StructuralMutationFailed { block, .. } => *block,
        }
    }
}

// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use blockyard_script::{BlockId, PointId};

/// Visual-state notifications sent to the renderer during a drag.
///
/// These carry no decisions; a renderer typically toggles a highlight style.
/// The unit type `()` ignores every notification.
pub trait DragFeedback {
    /// The attachment point the dragged block would drop into, or `None` to
    /// clear any highlighted point.
    fn set_active(&mut self, point: Option<PointId>);

    /// Whether the dragged block currently has a valid drop target.
    fn set_drag_active(&mut self, block: BlockId, active: bool);
}

impl DragFeedback for () {
    fn set_active(&mut self, _: Option<PointId>) {}

    fn set_drag_active(&mut self, _: BlockId, _: bool) {}
}

impl<F: DragFeedback + ?Sized> DragFeedback for &mut F {
    fn set_active(&mut self, point: Option<PointId>) {
        (**self).set_active(point);
    }

    fn set_drag_active(&mut self, block: BlockId, active: bool) {
        (**self).set_drag_active(block, active);
    }
}

// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop zones: palette, canvas, or neither.

use kurbo::{Point, Rect};

/// The surface region a point falls into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    /// The block palette (template menu). Dropping here deletes.
    Palette,
    /// The scripting canvas.
    Canvas,
    /// Anywhere else. Dropping here deletes.
    Outside,
}

impl Zone {
    /// Returns `true` when a block released here should be discarded.
    #[must_use]
    pub const fn discards(self) -> bool {
        matches!(self, Self::Palette | Self::Outside)
    }
}

/// Bounds of the two drop surfaces.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Zones {
    /// Palette bounds.
    pub palette: Rect,
    /// Canvas bounds.
    pub canvas: Rect,
}

impl Zones {
    /// Creates zones from the palette and canvas bounds.
    #[must_use]
    pub const fn new(palette: Rect, canvas: Rect) -> Self {
        Self { palette, canvas }
    }

    /// Classify `point`. The palette wins where the two overlap.
    #[must_use]
    pub fn zone_at(&self, point: Point) -> Zone {
        if self.palette.contains(point) {
            Zone::Palette
        } else if self.canvas.contains(point) {
            Zone::Canvas
        } else {
            Zone::Outside
        }
    }
}

impl Default for Zones {
    fn default() -> Self {
        Self {
            palette: Rect::ZERO,
            canvas: Rect::ZERO,
        }
    }
}

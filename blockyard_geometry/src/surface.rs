// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface queries: read element geometry from the rendering layer.

use kurbo::{Point, Rect, Size};

use crate::Zone;

/// Read-only access to the geometry the rendering layer has laid out.
///
/// Hosts implement this over whatever owns layout (a retained view tree, a
/// box tree, a DOM bridge). Tests implement it over a table of programmed
/// rectangles. `E` is the host's element handle.
pub trait SurfaceQuery<E> {
    /// Top-left corner of `element` in surface coordinates, or `None` if the
    /// element is unknown or not laid out.
    fn position(&self, element: &E) -> Option<Point>;

    /// Outer size of `element`, or `None` if the element is unknown.
    fn size(&self, element: &E) -> Option<Size>;

    /// Which drop zone contains `point`.
    fn zone_at(&self, point: Point) -> Zone;
}

/// Current bounding rectangle of `element`.
///
/// The rectangle is recomputed on every call; callers that need a stable
/// snapshot must store the result themselves.
#[must_use]
pub fn rect_of<E, S>(surface: &S, element: &E) -> Option<Rect>
where
    S: SurfaceQuery<E> + ?Sized,
{
    let origin = surface.position(element)?;
    let size = surface.size(element)?;
    Some(Rect::from_origin_size(origin, size))
}

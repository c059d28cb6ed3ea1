// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap area between axis-aligned rectangles and winner selection.

use kurbo::Rect;

/// Area of the intersection of `a` and `b`.
///
/// Returns `0.0` as soon as any separating axis is found; the checks are
/// ordered left, right, top, bottom so that the common "far away" case exits
/// early. Rectangles that only share an edge score `0.0`.
///
/// The result is symmetric: `overlap_area(a, b) == overlap_area(b, a)`.
#[inline]
#[must_use]
pub fn overlap_area(a: &Rect, b: &Rect) -> f64 {
    if a.x0 > b.x1 || a.x1 < b.x0 || a.y0 > b.y1 || a.y1 < b.y0 {
        return 0.0;
    }
    let width = a.x1.min(b.x1) - a.x0.max(b.x0);
    let height = a.y1.min(b.y1) - a.y0.max(b.y0);
    width * height
}

/// Index and area of the candidate that overlaps `probe` the most.
///
/// A candidate replaces the current winner only when its area is strictly
/// greater, so ties keep the earliest candidate. Candidates with zero overlap
/// never win; `None` means nothing overlaps.
#[must_use]
pub fn best_overlap(probe: &Rect, candidates: &[Rect]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut best_area = 0.0;
    for (idx, candidate) in candidates.iter().enumerate() {
        let area = overlap_area(probe, candidate);
        if area > best_area {
            best_area = area;
            best = Some((idx, area));
        }
    }
    best
}

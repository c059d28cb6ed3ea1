// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target classification: which attachment points a dragged block may drop into.

use alloc::vec::Vec;

use blockyard_script::{BlockId, Category, PointContent, PointId, PointKind, Region, ScriptTree};
use hashbrown::HashSet;
use smallvec::SmallVec;

/// Ordered list of eligible drop targets.
pub type Targets = SmallVec<[PointId; 8]>;

/// Returns `true` if a block of `category` may drop into a point of `kind`
/// that currently holds `content`.
///
/// - Steps go into empty slots.
/// - Value blocks go into sockets of their own type that still show an input.
/// - Other blocks attach nowhere.
#[must_use]
pub fn accepts(category: Category, kind: PointKind, content: &PointContent) -> bool {
    match category {
        Category::Step => kind.is_slot() && matches!(content, PointContent::Empty),
        Category::Number | Category::Boolean | Category::String => match kind {
            PointKind::Socket(ty) => {
                category.value_type() == Some(ty) && matches!(content, PointContent::Input(_))
            }
            PointKind::Next | PointKind::Contained => false,
        },
        Category::Other => false,
    }
}

/// Collect the canvas attachment points `block` may drop into, in tree order.
///
/// Points owned by `block` or any of its descendants are never eligible.
/// Unknown blocks yield no targets.
pub fn eligible_targets<T: ScriptTree + ?Sized>(tree: &T, block: BlockId) -> Targets {
    let mut out = Targets::new();
    let Some(category) = tree.category(block) else {
        return out;
    };
    if category == Category::Other {
        return out;
    }

    let mut members = Vec::new();
    tree.subtree(block, &mut members);
    let excluded: HashSet<BlockId> = members.into_iter().collect();

    let mut points = Vec::new();
    tree.canvas_points(&mut points);
    out.extend(points.into_iter().filter(|point| {
        tree.point_owner(*point)
            .is_some_and(|owner| !excluded.contains(&owner))
            && free_for(tree, *point, category)
    }));
    out
}

/// Returns `true` if `point` is still on the canvas and can take a block of
/// `category` right now.
pub fn is_free_for<T: ScriptTree + ?Sized>(tree: &T, point: PointId, category: Category) -> bool {
    let on_canvas = tree
        .point_owner(point)
        .and_then(|owner| tree.region(owner))
        == Some(Region::Canvas);
    on_canvas && free_for(tree, point, category)
}

fn free_for<T: ScriptTree + ?Sized>(tree: &T, point: PointId, category: Category) -> bool {
    match (tree.point_kind(point), tree.point_content(point)) {
        (Some(kind), Some(content)) => accepts(category, kind, content),
        _ => false,
    }
}

// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Half-open containment: the left and top edges are inside, the right and bottom are not.
pub(crate) fn bounds_contains(bounds: Rect, point: Point) -> bool {
    bounds.contains(point)
}

/// Edge-inclusive overlap test; rectangles that share an edge overlap.
pub(crate) fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Shrink a scroll composite's bounds by the width of its right companion and
/// the height of its bottom companion.
pub(crate) fn shrink_for_companions(bounds: Rect, right: Option<Rect>, bottom: Option<Rect>) -> Rect {
    let mut shrunk = bounds;
    if let Some(r) = right {
        shrunk.x1 -= r.width();
    }
    if let Some(b) = bottom {
        shrunk.y1 -= b.height();
    }
    shrunk
}

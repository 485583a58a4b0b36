// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::CoordinateStore;

/// Reorders the interior of `route` by raw map position, keeping the
/// first and last nodes pinned.
///
/// Intermediates are sorted lexicographically on their `(x, y)` pair,
/// which keeps the drawn polyline visually coherent after completion has
/// spliced nodes in detour order rather than walking order. It is only a
/// heuristic: the sorted line can still double back on itself, and no
/// attempt is made to keep consecutive nodes graph-adjacent.
pub fn order_waypoints(coords: &CoordinateStore, route: &mut [String]) {
    if route.len() <= 3 {
        return;
    }

    let last = route.len() - 1;
    route[1..last].sort_by(|a, b| {
        let (ax, ay) = sort_key(coords, a);
        let (bx, by) = sort_key(coords, b);
        ax.total_cmp(&bx).then(ay.total_cmp(&by))
    });
}

/// Nodes without coordinates sort last, keeping the known geometry
/// contiguous at the front.
fn sort_key(coords: &CoordinateStore, id: &str) -> (f64, f64) {
    coords
        .get(id)
        .map_or((f64::INFINITY, f64::INFINITY), |p| (p.x, p.y))
}

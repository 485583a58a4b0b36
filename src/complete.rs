// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::BTreeSet;

use crate::{CoordinateStore, ForbiddenZoneIndex, Graph};

/// Whether an identifier names a principal (landmark) node.
///
/// Landmark labels in the coordinate data are written entirely in
/// upper-case (`"U"`, `"R2"`), while filler waypoints use mixed case
/// (`"accessT"`, `"middleCornerT"`). Only fillers may be inserted when
/// padding a route.
pub fn is_principal(id: &str) -> bool {
    let mut has_letter = false;
    for c in id.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_alphabetic() {
            has_letter = true;
        }
    }
    has_letter
}

/// Tuning knobs for route completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionConfig {
    /// Fewest nodes any drawn route should have.
    pub base_count: usize,

    /// Every full `distance_step` pixels between the endpoints raises the
    /// target by `step_increment` nodes.
    pub distance_step: f64,
    pub step_increment: usize,

    /// Multiplier applied when the straight start-end segment crosses a
    /// forbidden zone, since the actual route must then take a detour.
    pub zone_penalty: f64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_count: 4,
            distance_step: 250.0,
            step_increment: 1,
            zone_penalty: 1.5,
        }
    }
}

/// Decides how many nodes a drawn route between `start` and `end` should
/// have, scaling with the straight-line distance and never dropping below
/// `config.base_count`. Unknown endpoints fall back to the base count.
pub fn target_node_count(
    coords: &CoordinateStore,
    zones: &ForbiddenZoneIndex,
    start: &str,
    end: &str,
    config: &CompletionConfig,
) -> usize {
    let distance = coords.distance_between(start, end);
    if !distance.is_finite() {
        return config.base_count;
    }

    let mut count =
        config.base_count + (distance / config.distance_step) as usize * config.step_increment;

    if let (Some(a), Some(b)) = (coords.get(start), coords.get(end)) {
        if zones.segment_crosses(a, b) {
            count = (count as f64 * config.zone_penalty) as usize;
        }
    }

    count.max(config.base_count)
}

/// Pads `route` with filler nodes until it has at least `min_nodes`
/// entries, or no insertable candidate remains.
///
/// Candidates are the graph's non-principal nodes not already on the
/// route. Each pass scores every combination of a consecutive route pair
/// (u, v) and an unused candidate c by the detour cost
/// `weight(u, c) + weight(c, v)` over existing edges (a missing edge counts
/// as infinite), skips candidates whose insertion would cross a forbidden
/// zone on either sub-segment, and splices in the globally cheapest one.
///
/// The result is no longer weight-optimal: the extra nodes exist so the
/// drawn line follows the walkways instead of jumping from landmark to
/// landmark.
pub fn complete_route(
    graph: &Graph,
    coords: &CoordinateStore,
    zones: &ForbiddenZoneIndex,
    mut route: Vec<String>,
    min_nodes: usize,
) -> Vec<String> {
    if route.len() < 2 {
        return route;
    }

    let mut candidates: BTreeSet<&str> = graph
        .nodes()
        .filter(|id| !is_principal(id))
        .filter(|id| !route.iter().any(|on_route| on_route == id))
        .collect();

    while route.len() < min_nodes && !candidates.is_empty() {
        // (insertion index, candidate, detour cost) of the best splice so far.
        let mut best: Option<(usize, &str, f64)> = None;

        for i in 0..route.len() - 1 {
            let (u, v) = (route[i].as_str(), route[i + 1].as_str());
            for &c in &candidates {
                let detour = graph.get_edge(u, c) + graph.get_edge(c, v);
                if !detour.is_finite() {
                    continue;
                }
                if segment_blocked(coords, zones, u, c) || segment_blocked(coords, zones, c, v) {
                    continue;
                }
                if best.map_or(true, |(_, _, cost)| detour < cost) {
                    best = Some((i + 1, c, detour));
                }
            }
        }

        match best {
            Some((index, candidate, _)) => {
                let candidate = candidate.to_string();
                candidates.remove(candidate.as_str());
                route.insert(index, candidate);
            }
            // No candidate fits anywhere; further passes can't make progress.
            None => break,
        }
    }

    route
}

fn segment_blocked(
    coords: &CoordinateStore,
    zones: &ForbiddenZoneIndex,
    a: &str,
    b: &str,
) -> bool {
    match (coords.get(a), coords.get(b)) {
        (Some(pa), Some(pb)) => zones.segment_crosses(pa, pb),
        // Without coordinates there is nothing to check; the infinite
        // edge weight already rejects such candidates.
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ForbiddenZone, Point};

    fn coords(entries: &[(&str, f64, f64)]) -> CoordinateStore {
        entries
            .iter()
            .map(|&(id, x, y)| (id.to_string(), Point { x, y }))
            .collect()
    }

    #[test]
    fn principal_identifiers() {
        assert!(is_principal("U"));
        assert!(is_principal("R2"));
        assert!(is_principal("LIBRARY"));
        assert!(!is_principal("accessT"));
        assert!(!is_principal("middleCornerT"));
        assert!(!is_principal("42"));
        assert!(!is_principal(""));
    }

    #[test]
    fn pads_route_to_target() {
        let c = coords(&[
            ("A", 0.0, 0.0),
            ("w1", 2.0, 0.0),
            ("w2", 4.0, 0.0),
            ("B", 10.0, 0.0),
        ]);
        let zones = ForbiddenZoneIndex::default();
        let g = Graph::build(&c, &zones);

        let route = complete_route(&g, &c, &zones, vec!["A".into(), "B".into()], 4);
        assert_eq!(route.len(), 4);
        assert_eq!(route.first().map(String::as_str), Some("A"));
        assert_eq!(route.last().map(String::as_str), Some("B"));
        assert!(route.iter().any(|id| id == "w1"));
        assert!(route.iter().any(|id| id == "w2"));
    }

    #[test]
    fn never_exceeds_candidate_pool() {
        let c = coords(&[("A", 0.0, 0.0), ("w1", 2.0, 0.0), ("B", 10.0, 0.0)]);
        let zones = ForbiddenZoneIndex::default();
        let g = Graph::build(&c, &zones);

        // Only one filler exists; asking for ten nodes must stop at three.
        let route = complete_route(&g, &c, &zones, vec!["A".into(), "B".into()], 10);
        assert_eq!(route, ["A", "w1", "B"]);
    }

    #[test]
    fn principal_nodes_are_not_inserted() {
        let c = coords(&[("A", 0.0, 0.0), ("M", 5.0, 0.0), ("B", 10.0, 0.0)]);
        let zones = ForbiddenZoneIndex::default();
        let g = Graph::build(&c, &zones);

        let route = complete_route(&g, &c, &zones, vec!["A".into(), "B".into()], 3);
        assert_eq!(route, ["A", "B"]);
    }

    #[test]
    fn zone_crossing_candidates_are_rejected() {
        // "trap" sits right behind a wall: both sub-segments from A and B
        // towards it cross the zone, so it must never be spliced in even
        // though its edges were built before the wall was known.
        let c = coords(&[("A", 0.0, 0.0), ("trap", 5.0, 10.0), ("B", 10.0, 0.0)]);
        let g = Graph::build(&c, &ForbiddenZoneIndex::default());
        let zones = ForbiddenZoneIndex::from_iter([ForbiddenZone {
            x_min: 0.0,
            x_max: 10.0,
            y_min: 4.0,
            y_max: 6.0,
        }]);

        let route = complete_route(&g, &c, &zones, vec!["A".into(), "B".into()], 3);
        assert_eq!(route, ["A", "B"]);
    }

    #[test]
    fn short_routes_are_returned_untouched() {
        let c = coords(&[("A", 0.0, 0.0), ("w1", 2.0, 0.0)]);
        let zones = ForbiddenZoneIndex::default();
        let g = Graph::build(&c, &zones);

        assert_eq!(
            complete_route(&g, &c, &zones, vec!["A".into()], 4),
            ["A"]
        );
        assert!(complete_route(&g, &c, &zones, vec![], 4).is_empty());
    }

    #[test]
    fn target_count_scales_with_distance() {
        let c = coords(&[("A", 0.0, 0.0), ("B", 10.0, 0.0), ("C", 600.0, 0.0)]);
        let zones = ForbiddenZoneIndex::default();
        let config = CompletionConfig::default();

        // Close pair: base count.
        assert_eq!(target_node_count(&c, &zones, "A", "B", &config), 4);
        // 600 px away: two full 250-px steps on top of the base.
        assert_eq!(target_node_count(&c, &zones, "A", "C", &config), 6);
        // Unknown endpoint: base count.
        assert_eq!(target_node_count(&c, &zones, "A", "Q", &config), 4);
    }

    #[test]
    fn target_count_penalizes_blocked_sightline() {
        let c = coords(&[("A", 0.0, 0.0), ("C", 600.0, 0.0)]);
        let zones = ForbiddenZoneIndex::from_iter([ForbiddenZone {
            x_min: 290.0,
            x_max: 310.0,
            y_min: -10.0,
            y_max: 10.0,
        }]);
        let config = CompletionConfig::default();

        // (4 + 2) * 1.5 = 9.
        assert_eq!(target_node_count(&c, &zones, "A", "C", &config), 9);
    }
}

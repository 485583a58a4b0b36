// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use log::info;

use crate::cache::RouteCache;
use crate::complete::{complete_route, target_node_count, CompletionConfig};
use crate::dijkstra::{shortest_path, RouteError};
use crate::order::order_waypoints;
use crate::{CoordinateStore, ForbiddenZoneIndex, Graph};

/// Everything needed to answer route requests: the built [Graph], the
/// data it was derived from, completion tuning, required-waypoint
/// fallbacks and the persisted [RouteCache].
///
/// Constructed once per run; only the cache mutates afterwards.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    graph: Graph,
    coords: CoordinateStore,
    zones: ForbiddenZoneIndex,
    completion: CompletionConfig,
    fallbacks: BTreeMap<String, Vec<String>>,
    cache: RouteCache,
}

impl RoutePlanner {
    pub fn new(
        graph: Graph,
        coords: CoordinateStore,
        zones: ForbiddenZoneIndex,
        cache: RouteCache,
    ) -> Self {
        Self {
            graph,
            coords,
            zones,
            completion: CompletionConfig::default(),
            fallbacks: BTreeMap::new(),
            cache,
        }
    }

    /// Replaces the default [CompletionConfig].
    pub fn with_completion(mut self, completion: CompletionConfig) -> Self {
        self.completion = completion;
        self
    }

    /// Registers the waypoint sequence to substitute when the solver
    /// connects `start` directly to `end` with no intermediates. Used for
    /// pairs where the graph is known to be too coarse and the walkway
    /// actually bends through specific waypoints.
    pub fn add_fallback<I, S>(&mut self, start: &str, end: &str, waypoints: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallbacks.insert(
            RouteCache::key(start, end),
            waypoints.into_iter().map(Into::into).collect(),
        );
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn coords(&self) -> &CoordinateStore {
        &self.coords
    }

    pub fn cache(&self) -> &RouteCache {
        &self.cache
    }

    /// Returns the route from `start` to `end`, computing, padding,
    /// ordering and caching it if this pair hasn't been solved before
    /// (in either direction).
    pub fn route(&mut self, start: &str, end: &str) -> Result<Vec<String>, RouteError> {
        if let Some(route) = self.cache.get(start, end) {
            info!("route {} -> {} found in cache", start, end);
            return Ok(route.to_vec());
        }

        info!("computing route {} -> {}", start, end);
        let mut route = shortest_path(&self.graph, start, end)?;

        // A direct landmark-to-landmark hop usually means the graph is too
        // coarse there; a configured waypoint sequence takes precedence.
        if route.len() <= 2 {
            if let Some(required) = self.fallbacks.get(&RouteCache::key(start, end)) {
                route = required.clone();
            }
        }

        let target = target_node_count(&self.coords, &self.zones, start, end, &self.completion);
        let mut route = complete_route(&self.graph, &self.coords, &self.zones, route, target);
        order_waypoints(&self.coords, &mut route);

        self.cache.put(start, end, route.clone());
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    fn coords(entries: &[(&str, f64, f64)]) -> CoordinateStore {
        entries
            .iter()
            .map(|&(id, x, y)| (id.to_string(), Point { x, y }))
            .collect()
    }

    fn planner(entries: &[(&str, f64, f64)]) -> RoutePlanner {
        let c = coords(entries);
        let zones = ForbiddenZoneIndex::default();
        let graph = Graph::build(&c, &zones);
        RoutePlanner::new(graph, c, zones, RouteCache::in_memory())
    }

    #[test]
    fn repeated_requests_return_the_same_route() {
        let mut p = planner(&[
            ("A", 0.0, 0.0),
            ("mid", 600.0, 0.0),
            ("B", 1200.0, 0.0),
            ("w1", 200.0, 10.0),
            ("w2", 400.0, 10.0),
        ]);

        let first = p.route("A", "B").unwrap();
        let cached_entries = p.cache().len();
        let second = p.route("A", "B").unwrap();

        assert_eq!(first, second);
        // The second call was a cache hit: nothing new was stored.
        assert_eq!(p.cache().len(), cached_entries);
    }

    #[test]
    fn reverse_request_yields_reversed_route() {
        let mut p = planner(&[
            ("A", 0.0, 0.0),
            ("mid", 600.0, 0.0),
            ("B", 1200.0, 0.0),
        ]);

        let forward = p.route("A", "B").unwrap();
        let mut backward = p.route("B", "A").unwrap();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn endpoints_are_preserved() {
        let mut p = planner(&[
            ("A", 0.0, 0.0),
            ("w1", 100.0, 20.0),
            ("w2", 300.0, 20.0),
            ("B", 400.0, 0.0),
        ]);

        let route = p.route("A", "B").unwrap();
        assert_eq!(route.first().map(String::as_str), Some("A"));
        assert_eq!(route.last().map(String::as_str), Some("B"));
        assert!(route.len() >= 2);
    }

    #[test]
    fn fallback_replaces_direct_hops() {
        let mut p = planner(&[
            ("U", 0.0, 0.0),
            ("T", 100.0, 0.0),
            ("accessT", 200.0, 0.0),
            ("R", 300.0, 0.0),
        ])
        .with_completion(CompletionConfig {
            base_count: 2,
            ..CompletionConfig::default()
        });
        p.add_fallback("U", "R", ["U", "T", "accessT", "R"]);

        let route = p.route("U", "R").unwrap();
        assert_eq!(route, ["U", "T", "accessT", "R"]);
    }

    #[test]
    fn unconfigured_direct_hops_stand() {
        let mut p = planner(&[("A", 0.0, 0.0), ("B", 5.0, 0.0)]);
        assert_eq!(p.route("A", "B").unwrap(), ["A", "B"]);
    }

    #[test]
    fn no_route_is_surfaced_not_cached() {
        let mut p = planner(&[("A", 0.0, 0.0), ("B", 2000.0, 2000.0)]);

        assert!(matches!(
            p.route("A", "B"),
            Err(RouteError::NoRoute { .. })
        ));
        assert!(p.cache().is_empty());
    }
}

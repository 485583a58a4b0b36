// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{euclidean_distance, CoordinateStore, ForbiddenZoneIndex};

/// Longest allowed direct connection between two nodes, in pixel units.
/// Anything farther apart must be reached through intermediate nodes.
pub const MAX_EDGE_DISTANCE: f64 = 1000.0;

/// Represents the campus walking network as a weighted adjacency mapping
/// from node identifier to `{neighbor: distance}`.
///
/// Although walking connections are undirected, every connection is stored
/// as two independent directed entries with the same weight. Invariants:
/// no self-loops, and an edge exists only where both endpoints have known
/// coordinates, their distance is below [MAX_EDGE_DISTANCE], and the
/// straight segment between them stays clear of every forbidden zone.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Graph(BTreeMap<String, BTreeMap<String, f64>>);

impl Graph {
    /// Derives the graph from the known coordinates and forbidden zones.
    ///
    /// Every ordered pair of distinct nodes is considered independently,
    /// which makes this quadratic in node count. That is fine for a campus
    /// map with at most a few hundred named points; a spatial index would
    /// only pay off well beyond that.
    pub fn build(coords: &CoordinateStore, zones: &ForbiddenZoneIndex) -> Self {
        let mut adjacency: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

        for (node, at) in coords.iter() {
            let neighbors = adjacency.entry(node.to_string()).or_default();
            for (other, other_at) in coords.iter() {
                if node == other {
                    continue;
                }
                let distance = euclidean_distance(at, other_at);
                if distance >= MAX_EDGE_DISTANCE {
                    continue;
                }
                if zones.segment_crosses(at, other_at) {
                    continue;
                }
                neighbors.insert(other.to_string(), distance);
            }
        }

        Self(adjacency)
    }

    /// Returns the number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if a node with the given identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Returns an iterator over all node identifiers, in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over the outgoing edges of a node, in neighbor
    /// identifier order. Unknown nodes yield nothing.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = (&str, f64)> {
        self.0
            .get(id)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, &weight)| (to.as_str(), weight)))
    }

    /// Gets the weight of the edge from one node to another.
    /// If such an edge doesn't exist, returns [f64::INFINITY].
    pub fn get_edge(&self, from: &str, to: &str) -> f64 {
        self.0
            .get(from)
            .and_then(|edges| edges.get(to).copied())
            .unwrap_or(f64::INFINITY)
    }
}

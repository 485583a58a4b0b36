// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, BinaryHeap};

use super::RouteError;
use crate::Graph;

#[derive(Debug, Clone, Copy)]
struct QueueItem<'a> {
    at: &'a str,
    cost: f64,
}

impl PartialEq for QueueItem<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.at.eq(other.at)
    }
}

impl Eq for QueueItem<'_> {}

impl PartialOrd for QueueItem<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // NOTE: We revert the order of comparison, as lower costs are
        // considered better ("higher"), and Rust's BinaryHeap is a max-heap.
        // Equal costs fall back to identifier order, so that runs over the
        // same graph always expand nodes in the same sequence.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap()
            .then_with(|| other.at.cmp(self.at))
    }
}

fn reconstruct_path(came_from: &BTreeMap<&str, &str>, last: &str) -> Vec<String> {
    let mut path = vec![last.to_string()];
    let mut current = last;

    while let Some(&previous) = came_from.get(current) {
        path.push(previous.to_string());
        current = previous;
    }

    path.reverse();
    return path;
}

/// Uses [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// to find the cheapest sequence of nodes connecting `start` to `end` in
/// the provided graph.
///
/// The search stops as soon as the end node is finalized, and ties between
/// equally-cheap frontier nodes are broken by identifier order, so repeated
/// runs over the same graph reproduce the same path exactly.
///
/// Returns [RouteError::UnknownNode] if either endpoint is absent from the
/// graph, and [RouteError::NoRoute] if the end is unreachable.
pub fn shortest_path(g: &Graph, start: &str, end: &str) -> Result<Vec<String>, RouteError> {
    if !g.contains(start) {
        return Err(RouteError::UnknownNode(start.to_string()));
    }
    if !g.contains(end) {
        return Err(RouteError::UnknownNode(end.to_string()));
    }

    let mut queue: BinaryHeap<QueueItem> = BinaryHeap::new();
    let mut came_from: BTreeMap<&str, &str> = BTreeMap::new();
    let mut known_costs: BTreeMap<&str, f64> = BTreeMap::new();

    queue.push(QueueItem { at: start, cost: 0.0 });
    known_costs.insert(start, 0.0);

    while let Some(item) = queue.pop() {
        if item.at == end {
            return Ok(reconstruct_path(&came_from, end));
        }

        // Contrary to the textbook definition, we might keep multiple items
        // in the queue for the same node. Stale ones are skipped here.
        if item.cost > known_costs.get(item.at).copied().unwrap_or(f64::INFINITY) {
            continue;
        }

        for (neighbor, weight) in g.neighbors(item.at) {
            let neighbor_cost = item.cost + weight;
            if neighbor_cost >= known_costs.get(neighbor).copied().unwrap_or(f64::INFINITY) {
                continue;
            }

            came_from.insert(neighbor, item.at);
            known_costs.insert(neighbor, neighbor_cost);
            queue.push(QueueItem {
                at: neighbor,
                cost: neighbor_cost,
            });
        }
    }

    Err(RouteError::NoRoute {
        start: start.to_string(),
        end: end.to_string(),
    })
}

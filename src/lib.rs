// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Walking-route computation over a fixed campus map.
//!
//! Named points on the map raster are connected into a weighted graph
//! (Euclidean distances, capped at [MAX_EDGE_DISTANCE], with edges
//! through forbidden rectangular zones removed), routes are solved with
//! Dijkstra, padded with filler waypoints for smoother drawing, ordered
//! spatially, cached to disk, and finally stroked onto the map image.
//!
//! # Example
//!
//! ```no_run
//! let coords = senda::data::load_coordinates("coordinates.json");
//! let zones = senda::data::load_zones("forbidden_zones.json");
//! let graph = senda::Graph::build(&coords, &zones);
//!
//! let cache = senda::RouteCache::load("routes.json");
//! let mut planner = senda::RoutePlanner::new(graph, coords, zones, cache);
//! let route = planner.route("U", "R").expect("failed to find route");
//!
//! println!("Route: {:?}", route);
//! ```

use serde::{Deserialize, Serialize};

mod cache;
mod complete;
mod coords;
pub mod data;
mod dijkstra;
mod distance;
mod graph;
mod order;
mod planner;
pub mod raster;
pub mod render;
mod zones;

pub use cache::RouteCache;
pub use complete::{complete_route, is_principal, target_node_count, CompletionConfig};
pub use coords::CoordinateStore;
pub use dijkstra::{shortest_path, RouteError};
pub use distance::euclidean_distance;
pub use graph::{Graph, MAX_EDGE_DISTANCE};
pub use order::order_waypoints;
pub use planner::RoutePlanner;
pub use zones::{ForbiddenZone, ForbiddenZoneIndex};

/// A position on the map raster, in pixel units. The origin sits at the
/// top-left corner of the image, like everywhere else in raster land.
///
/// Persisted as a plain 2-element `[x, y]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

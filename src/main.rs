use std::error::Error;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::{info, warn};
use senda::raster::PixmapCanvas;
use senda::render::{draw_markers, draw_route, RouteStyle};

/// Start and end landmarks for this run. One invocation computes and
/// draws exactly one route; there is no command-line surface.
const START_NODE: &str = "U";
const END_NODE: &str = "R";

const COORDINATES_FILE: &str = "coordinates.json";
const ZONES_FILE: &str = "forbidden_zones.json";
const ROUTES_FILE: &str = "routes.json";
const GRAPH_SNAPSHOT_FILE: &str = "graph.json";
const MAP_FILE: &str = "images/map.png";

/// Waypoints the U-R walkway actually bends through. The two buildings
/// face each other across open ground, so the solver alone connects them
/// with a straight two-node hop that cuts across the lawn.
const U_R_WAYPOINTS: [&str; 6] = ["U", "T", "accessT", "middleCornerT", "rightCornerR", "R"];

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct MapLoadError(PathBuf, #[source] image::ImageError);

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();

    let coords = senda::data::load_coordinates(COORDINATES_FILE);
    let zones = senda::data::load_zones(ZONES_FILE);
    info!(
        "loaded {} coordinates and {} forbidden zones",
        coords.len(),
        zones.len()
    );

    let graph = senda::Graph::build(&coords, &zones);
    info!("built graph with {} nodes", graph.len());

    let cache = senda::RouteCache::load(ROUTES_FILE);
    let mut planner = senda::RoutePlanner::new(graph, coords, zones, cache);
    planner.add_fallback(START_NODE, END_NODE, U_R_WAYPOINTS);

    let route = planner.route(START_NODE, END_NODE)?;
    info!("route from {} to {}: {:?}", START_NODE, END_NODE, route);

    if let Err(e) = senda::data::save_graph_snapshot(
        GRAPH_SNAPSHOT_FILE,
        planner.graph(),
        Some(&senda::RouteCache::key(START_NODE, END_NODE)),
    ) {
        // Inspection-only output; not worth aborting the run over.
        warn!("could not save graph snapshot: {}", e);
    }

    let map = load_map(MAP_FILE)?;
    let mut canvas = PixmapCanvas::from_image(&map).ok_or("map image has zero size")?;

    draw_route(&mut canvas, planner.coords(), &route, &RouteStyle::default());

    let endpoints: Vec<senda::Point> = [START_NODE, END_NODE]
        .iter()
        .filter_map(|id| planner.coords().get(id))
        .collect();
    draw_markers(&mut canvas, &endpoints, 20.0, [255, 0, 0, 255]);

    let output = format!("route_{}_{}.png", START_NODE, END_NODE);
    canvas.to_image().save(&output)?;
    info!("saved {}", output);

    Ok(())
}

fn load_map<P: AsRef<Path>>(path: P) -> Result<RgbaImage, MapLoadError> {
    match image::open(path.as_ref()) {
        Ok(img) => Ok(img.into_rgba8()),
        Err(e) => Err(MapLoadError(PathBuf::from(path.as_ref()), e)),
    }
}

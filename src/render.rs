// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Turns a computed route into line work on a raster surface.
//!
//! The renderer only decides *what* to draw; pixels and stroke primitives
//! belong to a [Canvas] implementation (see
//! [PixmapCanvas](crate::raster::PixmapCanvas)).

use log::warn;

use crate::{CoordinateStore, Point};

/// Straight (non-premultiplied) RGBA color.
pub type Color = [u8; 4];

/// Raster surface the renderer draws onto.
pub trait Canvas {
    /// Strokes an open polyline through `points`.
    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Color);

    /// Fills a circle centered at `center`.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
}

/// Stroke colors and widths for a drawn route: a wide dark outline pass
/// with a narrower bright fill on top. Defaults match the campus map
/// style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStyle {
    pub outline_color: Color,
    pub outline_width: f32,
    pub fill_color: Color,
    pub fill_width: f32,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            outline_color: [0, 0, 0, 255],
            outline_width: 40.0,
            fill_color: [255, 255, 0, 255],
            fill_width: 30.0,
        }
    }
}

/// Draws `route` onto `canvas` as connected line segments.
///
/// Node identifiers without coordinates are skipped with a diagnostic.
/// Returns the number of points actually drawn; with fewer than 2
/// resolvable points there is no line to draw, and the canvas is left
/// untouched.
pub fn draw_route<C: Canvas>(
    canvas: &mut C,
    coords: &CoordinateStore,
    route: &[String],
    style: &RouteStyle,
) -> usize {
    let mut points = Vec::with_capacity(route.len());
    for id in route {
        match coords.get(id) {
            Some(point) => points.push(point),
            None => warn!("no coordinates for node {}, skipping", id),
        }
    }

    if points.len() < 2 {
        warn!("not enough resolvable nodes to draw a route");
        return 0;
    }

    canvas.stroke_polyline(&points, style.outline_width, style.outline_color);
    canvas.stroke_polyline(&points, style.fill_width, style.fill_color);
    points.len()
}

/// Marks positions on the map with filled dots, e.g. the route endpoints
/// or every named landmark when debugging coordinate data.
pub fn draw_markers<C: Canvas>(canvas: &mut C, points: &[Point], radius: f32, color: Color) {
    for &point in points {
        canvas.fill_circle(point, radius, color);
    }
}

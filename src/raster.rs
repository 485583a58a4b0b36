// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! A [Canvas] backed by a tiny-skia [Pixmap], so route strokes get round
//! caps, round joins and anti-aliasing. Conversion to and from
//! [image::RgbaImage] is explicit because tiny-skia stores premultiplied
//! RGBA while `image` stores straight RGBA.

use image::{Rgba, RgbaImage};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::render::{Canvas, Color};
use crate::Point;

pub struct PixmapCanvas {
    pixmap: Pixmap,
}

impl PixmapCanvas {
    /// A blank, fully transparent canvas.
    /// Returns [None] when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    /// A canvas initialized with the pixels of an existing image,
    /// typically the campus map the route gets drawn over.
    /// Returns [None] when either dimension is zero.
    pub fn from_image(img: &RgbaImage) -> Option<Self> {
        let mut pixmap = Pixmap::new(img.width(), img.height())?;

        let data = pixmap.data_mut();
        for (i, pixel) in img.pixels().enumerate() {
            let off = i * 4;
            let Rgba([r, g, b, a]) = *pixel;
            // Premultiply: channel = straight * alpha / 255.
            data[off] = (u16::from(r) * u16::from(a) / 255) as u8;
            data[off + 1] = (u16::from(g) * u16::from(a) / 255) as u8;
            data[off + 2] = (u16::from(b) * u16::from(a) / 255) as u8;
            data[off + 3] = a;
        }

        Some(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Copies the canvas back out as a straight-RGBA image, ready for
    /// [RgbaImage::save].
    pub fn to_image(&self) -> RgbaImage {
        let data = self.pixmap.data();
        let mut img = RgbaImage::new(self.width(), self.height());

        for (i, pixel) in img.pixels_mut().enumerate() {
            let off = i * 4;
            let a = data[off + 3];
            if a == 0 {
                *pixel = Rgba([0, 0, 0, 0]);
            } else {
                // Un-premultiply: channel = premultiplied * 255 / alpha.
                let r = u16::from(data[off]) * 255 / u16::from(a);
                let g = u16::from(data[off + 1]) * 255 / u16::from(a);
                let b = u16::from(data[off + 2]) * 255 / u16::from(a);
                *pixel = Rgba([r as u8, g as u8, b as u8, a]);
            }
        }

        img
    }

    fn paint(color: Color) -> Paint<'static> {
        let [r, g, b, a] = color;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }
}

impl Canvas for PixmapCanvas {
    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Color) {
        let mut pb = PathBuilder::new();
        if let Some(first) = points.first() {
            pb.move_to(first.x as f32, first.y as f32);
            for point in &points[1..] {
                pb.line_to(point.x as f32, point.y as f32);
            }
        }
        let Some(path) = pb.finish() else {
            return; // empty or degenerate path
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &Self::paint(color),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius)
        else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &Self::paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(PixmapCanvas::new(0, 10).is_none());
        assert!(PixmapCanvas::new(10, 0).is_none());
    }

    #[test]
    fn stroke_colors_pixels_under_the_line() {
        let mut canvas = PixmapCanvas::new(11, 11).unwrap();
        canvas.stroke_polyline(
            &[Point { x: 0.0, y: 5.0 }, Point { x: 10.0, y: 5.0 }],
            5.0,
            [255, 0, 0, 255],
        );

        let img = canvas.to_image();
        assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0, 255]);
        // Far above the stroke: untouched.
        assert_eq!(img.get_pixel(5, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn image_round_trip_preserves_opaque_pixels() {
        let map = RgbaImage::from_pixel(4, 3, Rgba([10, 120, 200, 255]));
        let canvas = PixmapCanvas::from_image(&map).unwrap();

        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert_eq!(canvas.to_image(), map);
    }

    #[test]
    fn circle_fills_its_center() {
        let mut canvas = PixmapCanvas::new(21, 21).unwrap();
        canvas.fill_circle(Point { x: 10.0, y: 10.0 }, 5.0, [0, 0, 255, 255]);

        let img = canvas.to_image();
        assert_eq!(img.get_pixel(10, 10).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }
}

//! Integer outline rasterization.
//!
//! Paths are drawn into a bitmap just big enough for their bounding box plus the stroke width.
//! Thick strokes are made from square dabs rather than anti-aliasing so the output stays in the
//! small palettes monochrome and low colour displays use.

use alloc::vec::Vec;
use core::mem::swap;

use crate::{
    bitmap::Bitmap,
    error::{Geometry, ShapeError},
    geometry::{Bounds, Point},
};

/// A bitmap holding a rasterized path and where to place it in the frame the path's points
/// were given in.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub bitmap: Bitmap,
    pub origin: Point,
}

impl Outline {
    /// An empty bitmap sized for `points` drawn with `stroke`, together with `points` moved into
    /// the bitmap's frame.
    pub fn blank(points: &[Point], stroke: u16) -> Result<(Self, Vec<Point>), ShapeError> {
        if stroke == 0 {
            return Err(Geometry::ZeroStroke.into());
        }
        let bounds = Bounds::of(points)?;
        let s = stroke as usize;
        let shifted = points
            .iter()
            .map(|p| p.offset(-bounds.min.x, -bounds.min.y))
            .collect();

        Ok((
            Self {
                bitmap: Bitmap::new(bounds.width() + s, bounds.height() + s),
                origin: bounds.min,
            },
            shifted,
        ))
    }
}

pub fn build_outline(
    points: &[Point],
    color_index: u8,
    close: bool,
    stroke: u16,
) -> Result<Outline, ShapeError> {
    let (mut outline, shifted) = Outline::blank(points, stroke)?;
    draw_path(&mut outline.bitmap, &shifted, color_index, close, stroke);
    Ok(outline)
}

/// Draws lines between consecutive `points`. When `close` is set the last point is joined back
/// to the first.
pub fn draw_path(bitmap: &mut Bitmap, points: &[Point], color_index: u8, close: bool, stroke: u16) {
    let closing = if close { points.first() } else { None };
    let mut path = points.iter().chain(closing);
    let Some(mut prev) = path.next() else {
        return;
    };
    for p in path {
        draw_line(bitmap, *prev, *p, color_index, stroke);
        prev = p;
    }
}

#[inline]
fn dab(bitmap: &mut Bitmap, x: i32, y: i32, color_index: u8, stroke: u16) {
    if stroke > 1 {
        let s = stroke as i32;
        bitmap.fill_region(x, y, x + s, y + s, color_index);
    } else {
        bitmap.set(x, y, color_index);
    }
}

/// Bresenham line from `p0` to `p1` inclusive. Each point is a `stroke` sized square whose top
/// left corner is the point, so a thick line grows right and down into the stroke margin.
pub fn draw_line(bitmap: &mut Bitmap, p0: Point, p1: Point, color_index: u8, stroke: u16) {
    let Point {
        x: mut x0,
        y: mut y0,
    } = p0;
    let Point {
        x: mut x1,
        y: mut y1,
    } = p1;

    if x0 == x1 {
        for y in y0.min(y1)..=y0.max(y1) {
            dab(bitmap, x0, y, color_index, stroke);
        }
        return;
    }
    if y0 == y1 {
        for x in x0.min(x1)..=x0.max(x1) {
            dab(bitmap, x, y0, color_index, stroke);
        }
        return;
    }

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        swap(&mut x0, &mut y0);
        swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        swap(&mut x0, &mut x1);
        swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let ystep = if y0 < y1 { 1 } else { -1 };
    let mut err = dx / 2;

    let mut y = y0;
    for x in x0..=x1 {
        if steep {
            dab(bitmap, y, x, color_index, stroke);
        } else {
            dab(bitmap, x, y, color_index, stroke);
        }
        err -= dy;
        if err < 0 {
            y += ystep;
            err += dx;
        }
    }
}

#[cfg(test)]
#[path = "raster_test.rs"]
mod test;

use alloc::vec::Vec;

use crate::{
    bitmap::Bitmap,
    geometry::{Bounds, Point},
    palette::{Color, Palette, OUTLINE},
    Tile,
};

/// A platform polygon filler.
///
/// `points` are in the caller's frame, not translated to a bitmap. The returned tile uses a
/// palette of its own: transparent at index 0 and `color` at index 1. `None` means there is
/// nothing to draw.
pub trait VectorFill {
    fn fill(&self, points: &[Point], color: Color) -> Option<Tile>;
}

/// Software [`VectorFill`] using the even-odd rule sampled at pixel centres.
///
/// Spans cover the pixels whose centre lies inside an edge pair, so polygons that share an edge
/// do not both paint it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanlineFill;

impl VectorFill for ScanlineFill {
    fn fill(&self, points: &[Point], color: Color) -> Option<Tile> {
        if points.len() < 3 {
            return None;
        }
        let bounds = Bounds::of(points).ok()?;
        let local: Vec<Point> = points
            .iter()
            .map(|p| p.offset(-bounds.min.x, -bounds.min.y))
            .collect();

        let mut bitmap = Bitmap::new(bounds.width(), bounds.height());
        let mut crossings = Vec::with_capacity(local.len());
        for y in 0..bitmap.height() as i32 {
            crossings.clear();
            let sample = 2 * y + 1;
            let mut prev = local[local.len() - 1];
            for p in local.iter() {
                if let Some(x) = first_covered(prev, *p, sample) {
                    crossings.push(x);
                }
                prev = *p;
            }
            crossings.sort_unstable();
            for span in crossings.chunks_exact(2) {
                bitmap.fill_region(span[0], y, span[1], y + 1, OUTLINE);
            }
        }

        Some(Tile {
            bitmap,
            palette: Palette::single(color),
            origin: bounds.min,
        })
    }
}

/// Where edge `a`→`b` crosses the horizontal line at `sample / 2`, as the first pixel column
/// whose centre is to the right of the crossing. `sample` is odd so a vertex never lies on it.
fn first_covered(a: Point, b: Point, sample: i32) -> Option<i32> {
    let (ya, yb) = (2 * a.y, 2 * b.y);
    if (ya <= sample) == (yb <= sample) {
        return None;
    }
    let dy = yb - ya;
    let num = 2 * a.x * dy + 2 * (sample - ya) * (b.x - a.x) - dy;
    Some(ceil_div(num, 2 * dy))
}

fn ceil_div(num: i32, den: i32) -> i32 {
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    -(-num).div_euclid(den)
}

#[cfg(test)]
#[path = "fill_test.rs"]
mod test;

use crate::error::{Geometry, ShapeError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Smallest axis aligned box holding every point of a path. Both corners are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn of(points: &[Point]) -> Result<Self, ShapeError> {
        let (first, rest) = points.split_first().ok_or(Geometry::NoPoints)?;
        Ok(rest.iter().fold(
            Self {
                min: *first,
                max: *first,
            },
            |b, p| Self {
                min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
            },
        ))
    }

    pub fn width(&self) -> usize {
        (self.max.x - self.min.x) as usize + 1
    }

    pub fn height(&self) -> usize {
        (self.max.y - self.min.y) as usize + 1
    }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod test;

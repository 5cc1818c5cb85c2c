#![no_std]
extern crate alloc;

#[macro_use]
mod macros;

pub mod arc;
pub mod bitmap;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod palette;
pub mod polygon;
pub mod raster;

pub use arc::{Arc, ArcParams};
pub use bitmap::Bitmap;
pub use error::{Geometry, ShapeError};
pub use fill::{ScanlineFill, VectorFill};
pub use geometry::{Bounds, Point};
pub use palette::{Color, Palette};
pub use polygon::{FilledPolygon, Polygon};

/// A rasterized overlay: an indexed bitmap, the palette its indices refer to and where its top
/// left corner sits in the parent frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub bitmap: Bitmap,
    pub palette: Palette,
    pub origin: Point,
}

/// Up to two tiles in paint order: fill first, then outline.
pub type Layers<'a> = heapless::Vec<&'a Tile, 2>;

pub trait Render {
    fn render(&self) -> Layers<'_>;
}

use alloc::vec::Vec;

use crate::{
    error::{Geometry, ShapeError},
    fill::VectorFill,
    geometry::{Bounds, Point},
    palette::{Color, Palette, OUTLINE},
    raster::{draw_path, Outline},
    Layers, Render, Tile,
};

#[derive(Debug, Clone, PartialEq)]
struct PolygonParams {
    points: Vec<Point>,
    outline: Option<Color>,
    close: bool,
    colors: u8,
    stroke: u16,
}

impl PolygonParams {
    fn build(&self) -> Result<Tile, ShapeError> {
        if self.colors == 0 {
            return Err(Geometry::NoColors.into());
        }
        let mut palette = Palette::new(self.colors as usize + 1)?;
        let (outline, shifted) = Outline::blank(&self.points, self.stroke)?;
        let mut bitmap = outline.bitmap;

        match self.outline {
            Some(color) => {
                palette.set(OUTLINE, color);
                palette.make_opaque(OUTLINE);
                draw_path(&mut bitmap, &shifted, OUTLINE, self.close, self.stroke);
            }
            None => {
                palette.set(OUTLINE, 0);
                palette.make_transparent(OUTLINE);
            }
        }

        Ok(Tile {
            bitmap,
            palette,
            origin: outline.origin,
        })
    }
}

/// An outline through a list of points, rasterized into a single tile.
///
/// Any change rebuilds the whole tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    params: PolygonParams,
    tile: Tile,
}

impl Polygon {
    /// A closed one pixel outline with room in its palette for an outline and a fill colour.
    pub fn new(points: Vec<Point>, outline: Option<Color>) -> Result<Self, ShapeError> {
        Self::with_options(points, outline, true, 2, 1)
    }

    /// `colors` is the number of palette entries besides the transparent one.
    pub fn with_options(
        points: Vec<Point>,
        outline: Option<Color>,
        close: bool,
        colors: u8,
        stroke: u16,
    ) -> Result<Self, ShapeError> {
        let params = PolygonParams {
            points,
            outline,
            close,
            colors,
            stroke,
        };
        let tile = params.build()?;
        Ok(Self { params, tile })
    }

    fn update(&mut self, f: impl FnOnce(&mut PolygonParams)) -> Result<(), ShapeError> {
        let mut params = self.params.clone();
        f(&mut params);
        self.tile = params.build()?;
        self.params = params;
        Ok(())
    }

    pub fn points(&self) -> &[Point] {
        &self.params.points
    }

    pub fn set_points(&mut self, points: Vec<Point>) -> Result<(), ShapeError> {
        self.update(|p| p.points = points)
    }

    pub fn outline(&self) -> Option<Color> {
        self.params.outline
    }

    /// `None` makes the outline index transparent and stops it being drawn.
    pub fn set_outline(&mut self, outline: Option<Color>) -> Result<(), ShapeError> {
        self.update(|p| p.outline = outline)
    }

    pub fn close(&self) -> bool {
        self.params.close
    }

    pub fn set_close(&mut self, close: bool) -> Result<(), ShapeError> {
        self.update(|p| p.close = close)
    }

    pub fn stroke(&self) -> u16 {
        self.params.stroke
    }

    pub fn set_stroke(&mut self, stroke: u16) -> Result<(), ShapeError> {
        self.update(|p| p.stroke = stroke)
    }

    pub fn tile(&self) -> &Tile {
        &self.tile
    }
}

impl Render for Polygon {
    fn render(&self) -> Layers<'_> {
        let mut layers = Layers::new();
        if self.params.outline.is_some() {
            let _ = layers.push(&self.tile);
        }
        layers
    }
}

/// Fill tile and outline polygon for `points`. The fill is only made when there is a colour
/// for it and a filler to make it with.
pub(crate) fn build_layers(
    points: &[Point],
    outline: Option<Color>,
    fill: Option<Color>,
    close: bool,
    stroke: u16,
    vector_fill: Option<&dyn VectorFill>,
) -> Result<(Option<Tile>, Option<Polygon>), ShapeError> {
    if stroke == 0 {
        return Err(Geometry::ZeroStroke.into());
    }
    Bounds::of(points)?;

    let outline_polygon = match outline {
        Some(color) => Some(Polygon::with_options(
            points.to_vec(),
            Some(color),
            close,
            1,
            stroke,
        )?),
        None => None,
    };

    let fill_tile = match (fill, vector_fill) {
        (Some(color), Some(vf)) => vf.fill(points, color),
        (Some(_), None) => {
            debug!("no vector fill available; fill skipped");
            None
        }
        _ => None,
    };

    Ok((fill_tile, outline_polygon))
}

pub(crate) fn layers<'a>(fill: &'a Option<Tile>, outline: &'a Option<Polygon>) -> Layers<'a> {
    let mut layers = Layers::new();
    if let Some(tile) = fill {
        let _ = layers.push(tile);
    }
    if let Some(polygon) = outline {
        let _ = layers.push(polygon.tile());
    }
    layers
}

/// A polygon with an optional fill beneath an optional outline.
///
/// Filling needs a [`VectorFill`]; without one only the outline is drawn. The fill keeps its own
/// palette so its colour never shares an index with the outline.
pub struct FilledPolygon<'f> {
    points: Vec<Point>,
    outline: Option<Color>,
    fill: Option<Color>,
    close: bool,
    stroke: u16,
    vector_fill: Option<&'f dyn VectorFill>,
    fill_tile: Option<Tile>,
    outline_polygon: Option<Polygon>,
}

impl<'f> FilledPolygon<'f> {
    pub fn new(
        points: Vec<Point>,
        outline: Option<Color>,
        fill: Option<Color>,
        close: bool,
        stroke: u16,
        vector_fill: Option<&'f dyn VectorFill>,
    ) -> Result<Self, ShapeError> {
        let (fill_tile, outline_polygon) =
            build_layers(&points, outline, fill, close, stroke, vector_fill)?;
        Ok(Self {
            points,
            outline,
            fill,
            close,
            stroke,
            vector_fill,
            fill_tile,
            outline_polygon,
        })
    }

    fn rebuild(&mut self) -> Result<(), ShapeError> {
        let (fill_tile, outline_polygon) = build_layers(
            &self.points,
            self.outline,
            self.fill,
            self.close,
            self.stroke,
            self.vector_fill,
        )?;
        self.fill_tile = fill_tile;
        self.outline_polygon = outline_polygon;
        Ok(())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<Point>) -> Result<(), ShapeError> {
        Bounds::of(&points)?;
        self.points = points;
        self.rebuild()
    }

    pub fn outline(&self) -> Option<Color> {
        self.outline
    }

    pub fn set_outline(&mut self, outline: Option<Color>) -> Result<(), ShapeError> {
        self.outline = outline;
        self.rebuild()
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Option<Color>) -> Result<(), ShapeError> {
        self.fill = fill;
        self.rebuild()
    }

    pub fn close(&self) -> bool {
        self.close
    }

    pub fn set_close(&mut self, close: bool) -> Result<(), ShapeError> {
        self.close = close;
        self.rebuild()
    }

    pub fn stroke(&self) -> u16 {
        self.stroke
    }

    pub fn set_stroke(&mut self, stroke: u16) -> Result<(), ShapeError> {
        if stroke == 0 {
            return Err(Geometry::ZeroStroke.into());
        }
        self.stroke = stroke;
        self.rebuild()
    }

    pub fn fill_tile(&self) -> Option<&Tile> {
        self.fill_tile.as_ref()
    }

    pub fn outline_polygon(&self) -> Option<&Polygon> {
        self.outline_polygon.as_ref()
    }
}

impl Render for FilledPolygon<'_> {
    fn render(&self) -> Layers<'_> {
        layers(&self.fill_tile, &self.outline_polygon)
    }
}

#[cfg(test)]
#[path = "polygon_test.rs"]
mod test;

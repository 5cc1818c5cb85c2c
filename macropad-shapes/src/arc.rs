//! Annular sectors built from a polygon approximation.
//!
//! Directions use polar layout: 0° points right, 90° up, 180° left and 270° down. Screen y
//! grows downwards so `y = -r·sin(α)`.

use alloc::vec::Vec;

use crate::{
    error::{Geometry, ShapeError},
    fill::VectorFill,
    geometry::Point,
    palette::Color,
    polygon::{build_layers, layers, Polygon},
    Layers, Render, Tile,
};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArcParams {
    /// Outer radius.
    pub radius: f32,
    /// Span of the arc in degrees.
    pub angle: f32,
    /// Direction of the arc's midpoint in degrees.
    pub direction: f32,
    /// How many straight segments approximate the curve.
    pub segments: u16,
    /// Thickness; above 1 an inner ring is added and the outline is closed.
    pub arc_width: u16,
    pub outline: Option<Color>,
    pub fill: Option<Color>,
}

impl ArcParams {
    pub fn new(radius: f32, angle: f32, direction: f32, segments: u16) -> Self {
        Self {
            radius,
            angle,
            direction,
            segments,
            arc_width: 1,
            outline: None,
            fill: None,
        }
    }

    fn is_closed(&self) -> bool {
        self.arc_width > 1
    }
}

/// Nearest integer, halves away from zero.
fn round_half_away(v: f64) -> i64 {
    if v < 0.0 {
        (v - 0.5) as i64
    } else {
        (v + 0.5) as i64
    }
}

/// Taylor series for `|x| <= π/4`; the last term is below f64 precision there.
fn cos_sin_series(x: f64) -> (f64, f64) {
    let x2 = x * x;
    let (mut c, mut s) = (1.0, x);
    let (mut ct, mut st) = (1.0, x);
    for k in 1..=9 {
        let k = k as f64;
        ct *= -x2 / ((2.0 * k - 1.0) * (2.0 * k));
        st *= -x2 / ((2.0 * k) * (2.0 * k + 1.0));
        c += ct;
        s += st;
    }
    (c, s)
}

/// `(cos, sin)` of `degrees`. Whole quarter turns are taken off in degrees first, so the axes
/// come out exact.
pub(crate) fn cos_sin_degrees(degrees: f64) -> (f64, f64) {
    let quarter = round_half_away(degrees / 90.0);
    let (c, s) = cos_sin_series((degrees - quarter as f64 * 90.0).to_radians());
    match quarter.rem_euclid(4) {
        0 => (c, s),
        1 => (-s, c),
        2 => (-c, -s),
        _ => (s, -c),
    }
}

fn push_ring(
    points: &mut Vec<Point>,
    radius: f64,
    start: f64,
    step: f64,
    steps: impl Iterator<Item = u16>,
) {
    for i in steps {
        let (cos, sin) = cos_sin_degrees(start + i as f64 * step);
        points.push(Point::new(
            round_half_away(radius * cos) as i32,
            round_half_away(-radius * sin) as i32,
        ));
    }
}

/// Outline points of an arc centred on the origin: the outer ring from start to end and, when
/// `arc_width > 1`, the inner ring back from end to start.
pub fn arc_points(
    radius: f32,
    angle: f32,
    direction: f32,
    segments: u16,
    arc_width: u16,
) -> Result<Vec<Point>, ShapeError> {
    if segments == 0 {
        return Err(Geometry::ZeroSegments.into());
    }
    let (radius, angle, direction) = (radius as f64, angle as f64, direction as f64);
    let start = direction - angle / 2.0;
    let step = angle / segments as f64;

    let closed = arc_width > 1;
    let mut points = Vec::with_capacity((segments as usize + 1) * if closed { 2 } else { 1 });
    push_ring(&mut points, radius, start, step, 0..=segments);
    if closed {
        push_ring(
            &mut points,
            radius - arc_width as f64,
            start,
            step,
            (0..=segments).rev(),
        );
    }
    Ok(points)
}

/// An arc drawn as a one pixel outline, optionally filled when it has a width.
pub struct Arc<'f> {
    params: ArcParams,
    vector_fill: Option<&'f dyn VectorFill>,
    points: Vec<Point>,
    fill_tile: Option<Tile>,
    outline_polygon: Option<Polygon>,
}

impl<'f> Arc<'f> {
    pub fn new(params: ArcParams, vector_fill: Option<&'f dyn VectorFill>) -> Result<Self, ShapeError> {
        let mut arc = Self {
            params,
            vector_fill,
            points: Vec::new(),
            fill_tile: None,
            outline_polygon: None,
        };
        arc.rebuild(params)?;
        Ok(arc)
    }

    /// Regenerates the points and every tile from `params`. On error the arc is left as it was.
    fn rebuild(&mut self, params: ArcParams) -> Result<(), ShapeError> {
        let points = arc_points(
            params.radius,
            params.angle,
            params.direction,
            params.segments,
            params.arc_width,
        )?;
        // an open arc has no inside to fill
        let fill = params.fill.filter(|_| params.is_closed());
        let (fill_tile, outline_polygon) = build_layers(
            &points,
            params.outline,
            fill,
            params.is_closed(),
            1,
            self.vector_fill,
        )?;
        debug!("arc rebuilt from {} points", points.len());

        self.params = params;
        self.points = points;
        self.fill_tile = fill_tile;
        self.outline_polygon = outline_polygon;
        Ok(())
    }

    fn update(&mut self, f: impl FnOnce(&mut ArcParams)) -> Result<(), ShapeError> {
        let mut params = self.params;
        f(&mut params);
        self.rebuild(params)
    }

    pub fn params(&self) -> &ArcParams {
        &self.params
    }

    pub fn set_params(&mut self, params: ArcParams) -> Result<(), ShapeError> {
        self.rebuild(params)
    }

    pub fn radius(&self) -> f32 {
        self.params.radius
    }

    pub fn set_radius(&mut self, radius: f32) -> Result<(), ShapeError> {
        self.update(|p| p.radius = radius)
    }

    pub fn angle(&self) -> f32 {
        self.params.angle
    }

    pub fn set_angle(&mut self, angle: f32) -> Result<(), ShapeError> {
        self.update(|p| p.angle = angle)
    }

    /// Direction of the arc's midpoint, as given.
    pub fn direction(&self) -> f32 {
        self.params.direction
    }

    pub fn set_direction(&mut self, direction: f32) -> Result<(), ShapeError> {
        self.update(|p| p.direction = direction)
    }

    pub fn segments(&self) -> u16 {
        self.params.segments
    }

    pub fn set_segments(&mut self, segments: u16) -> Result<(), ShapeError> {
        self.update(|p| p.segments = segments)
    }

    pub fn arc_width(&self) -> u16 {
        self.params.arc_width
    }

    pub fn set_arc_width(&mut self, arc_width: u16) -> Result<(), ShapeError> {
        self.update(|p| p.arc_width = arc_width)
    }

    pub fn outline(&self) -> Option<Color> {
        self.params.outline
    }

    pub fn set_outline(&mut self, outline: Option<Color>) -> Result<(), ShapeError> {
        self.update(|p| p.outline = outline)
    }

    pub fn fill(&self) -> Option<Color> {
        self.params.fill
    }

    pub fn set_fill(&mut self, fill: Option<Color>) -> Result<(), ShapeError> {
        self.update(|p| p.fill = fill)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn fill_tile(&self) -> Option<&Tile> {
        self.fill_tile.as_ref()
    }

    pub fn outline_polygon(&self) -> Option<&Polygon> {
        self.outline_polygon.as_ref()
    }
}

impl Render for Arc<'_> {
    fn render(&self) -> Layers<'_> {
        layers(&self.fill_tile, &self.outline_polygon)
    }
}

#[cfg(test)]
#[path = "arc_test.rs"]
mod test;

//! Shapes drawn around the status label.
//!
//! The label itself is text and belongs to the display driver; this module provides the frame
//! border and a countdown ring that empties as the label's timeout runs out.

use alloc::vec;
use embassy_time::{Duration, Instant};
use macropad_shapes::{Arc, ArcParams, Point, Polygon, Render, ShapeError, Tile, VectorFill};

use crate::{
    config::{DisplayConfig, WHITE},
    status::Status,
};

const RING_RADIUS: i32 = 6;
const RING_WIDTH: u16 = 3;
const RING_SEGMENTS: u16 = 12;
const RING_MARGIN: i32 = 2;
/// Resolution of the countdown; the ring is only rebuilt when this many steps change.
pub const RING_STEPS: u64 = 12;

/// Tiles paired with their top left corner in display coordinates, in paint order.
pub type Placed<'a> = heapless::Vec<(&'a Tile, Point), 3>;

pub struct StatusScreen<'f> {
    border: Polygon,
    ring: Arc<'f>,
    ring_centre: Point,
    ring_step: u64,
}

impl<'f> StatusScreen<'f> {
    pub fn new(
        display: &DisplayConfig,
        vector_fill: Option<&'f dyn VectorFill>,
    ) -> Result<Self, ShapeError> {
        let (w, h) = (display.width, display.height);
        let border = Polygon::with_options(
            vec![
                Point::new(0, 0),
                Point::new(w - 1, 0),
                Point::new(w - 1, h - 1),
                Point::new(0, h - 1),
            ],
            Some(WHITE),
            true,
            1,
            1,
        )?;
        let ring = Arc::new(
            ArcParams {
                arc_width: RING_WIDTH,
                outline: Some(WHITE),
                fill: Some(WHITE),
                ..ArcParams::new(RING_RADIUS as f32, 0.0, 90.0, RING_SEGMENTS)
            },
            vector_fill,
        )?;

        Ok(Self {
            border,
            ring,
            ring_centre: Point::new(
                w - 1 - RING_MARGIN - RING_RADIUS,
                RING_MARGIN + RING_RADIUS,
            ),
            ring_step: 0,
        })
    }

    pub fn ring(&self) -> &Arc<'f> {
        &self.ring
    }

    pub fn ring_step(&self) -> u64 {
        self.ring_step
    }

    /// Resizes the countdown ring for `status` at `now`. Returns true if the screen changed.
    pub fn update(&mut self, status: &Status, now: Instant) -> Result<bool, ShapeError> {
        let step = ring_step(status.remaining(now), status.timeout());
        if step == self.ring_step {
            return Ok(false);
        }
        if step > 0 {
            self.ring
                .set_angle(360.0 * step as f32 / RING_STEPS as f32)?;
        }
        self.ring_step = step;
        Ok(true)
    }

    pub fn layers(&self) -> Placed<'_> {
        let mut placed = Placed::new();
        for tile in self.border.render() {
            let _ = placed.push((tile, tile.origin));
        }
        if self.ring_step > 0 {
            let c = self.ring_centre;
            for tile in self.ring.render() {
                let _ = placed.push((tile, tile.origin.offset(c.x, c.y)));
            }
        }
        placed
    }
}

/// Steps of [`RING_STEPS`] still to run, rounded up so the ring only vanishes at the timeout.
fn ring_step(remaining: Duration, timeout: Duration) -> u64 {
    let t = timeout.as_ticks();
    if t == 0 {
        return 0;
    }
    (remaining.as_ticks() * RING_STEPS).div_ceil(t)
}

#[cfg(test)]
#[path = "screen_test.rs"]
mod test;

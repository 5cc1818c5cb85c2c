use crate::error::{Geometry, ShapeError};

/// A 24 bit `0xRRGGBB` colour.
pub type Color = u32;

pub const MAX_COLORS: usize = 8;

/// Index every palette keeps transparent.
pub const TRANSPARENT: u8 = 0;
/// Index outlines are drawn with.
pub const OUTLINE: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Entry {
    color: Color,
    transparent: bool,
}

/// Maps the indices stored in a [`crate::Bitmap`] to colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: heapless::Vec<Entry, MAX_COLORS>,
}

impl Palette {
    /// A palette of `len` opaque black entries, except index 0 which is transparent.
    pub fn new(len: usize) -> Result<Self, ShapeError> {
        if len > MAX_COLORS {
            return Err(Geometry::TooManyColors.into());
        }
        let mut entries = heapless::Vec::new();
        for i in 0..len {
            let _ = entries.push(Entry {
                color: 0,
                transparent: i == TRANSPARENT as usize,
            });
        }
        Ok(Self { entries })
    }

    /// The two entry palette a fill overlay uses: transparent background and `color` at index 1.
    pub fn single(color: Color) -> Self {
        let mut entries = heapless::Vec::new();
        let _ = entries.push(Entry {
            color: 0,
            transparent: true,
        });
        let _ = entries.push(Entry {
            color,
            transparent: false,
        });
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set(&mut self, index: u8, color: Color) {
        if let Some(e) = self.entries.get_mut(index as usize) {
            e.color = color;
        }
    }

    pub fn make_transparent(&mut self, index: u8) {
        if let Some(e) = self.entries.get_mut(index as usize) {
            e.transparent = true;
        }
    }

    pub fn make_opaque(&mut self, index: u8) {
        if let Some(e) = self.entries.get_mut(index as usize) {
            e.transparent = false;
        }
    }

    pub fn is_transparent(&self, index: u8) -> bool {
        self.entries
            .get(index as usize)
            .is_none_or(|e| e.transparent)
    }

    /// The colour at `index`, or `None` when it is transparent or out of range.
    pub fn color(&self, index: u8) -> Option<Color> {
        self.entries
            .get(index as usize)
            .filter(|e| !e.transparent)
            .map(|e| e.color)
    }
}

#[cfg(test)]
#[path = "palette_test.rs"]
mod test;

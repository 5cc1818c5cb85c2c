use alloc::{vec, vec::Vec};

/// A grid of palette indices. Every cell starts at index 0, which palettes keep transparent.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Sets one pixel. Coordinates outside the bitmap are ignored.
    pub fn set(&mut self, x: i32, y: i32, color_index: u8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color_index;
        }
    }

    /// Fills the region `[x1, x2) × [y1, y2)`, clipped to the bitmap.
    pub fn fill_region(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color_index: u8) {
        let x1 = x1.clamp(0, self.width as i32) as usize;
        let x2 = x2.clamp(0, self.width as i32) as usize;
        let y1 = y1.clamp(0, self.height as i32) as usize;
        let y2 = y2.clamp(0, self.height as i32) as usize;
        if x1 >= x2 {
            return;
        }
        for y in y1..y2 {
            let row = y * self.width;
            self.pixels[row + x1..row + x2].fill(color_index);
        }
    }

    pub fn rows(&self) -> core::slice::ChunksExact<'_, u8> {
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Number of pixels set to `color_index`.
    pub fn count(&self, color_index: u8) -> usize {
        self.pixels.iter().filter(|c| **c == color_index).count()
    }
}

impl core::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Bitmap {}x{}", self.width, self.height)?;
        for row in self.rows() {
            for c in row {
                match c {
                    0 => f.write_str(".")?,
                    c => write!(f, "{c:x}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "bitmap_test.rs"]
mod test;

//! In-memory frame buffer
//!
//! A monochrome pixel buffer for hosts and tests, one cell per pixel.
//! Tracks a dirty flag so a flush task can skip unchanged frames.

use folio_core::{DisplayBackend, DisplayError};

/// Monochrome frame buffer with const-generic dimensions
pub struct FrameBuffer<const W: usize, const H: usize> {
    pixels: [[bool; W]; H],
    dirty: bool,
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            pixels: [[false; W]; H],
            dirty: true,
        }
    }

    /// Set a single pixel; out-of-range coordinates are ignored
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) {
        let (x, y) = (x as usize, y as usize);
        if x < W && y < H {
            self.pixels[y][x] = on;
            self.dirty = true;
        }
    }

    /// Read a pixel; out-of-range coordinates read as off
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        let (x, y) = (x as usize, y as usize);
        x < W && y < H && self.pixels[y][x]
    }

    /// Number of lit pixels
    pub fn lit_pixels(&self) -> usize {
        self.pixels
            .iter()
            .map(|row| row.iter().filter(|p| **p).count())
            .sum()
    }

    /// Whether the buffer changed since the last flush
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as flushed
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> DisplayBackend for FrameBuffer<W, H> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.pixels = [[false; W]; H];
        self.dirty = true;
        Ok(())
    }

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        let (x, y) = (x as usize, y as usize);
        if x >= W || y >= H {
            return Err(DisplayError::InvalidCoordinates);
        }
        // Clip to the buffer edge
        let x_end = (x + width as usize).min(W);
        let y_end = (y + height as usize).min(H);
        for row in &mut self.pixels[y..y_end] {
            for pixel in &mut row[x..x_end] {
                *pixel = true;
            }
        }
        self.dirty = true;
        Ok(())
    }

    fn dimensions(&self) -> (u16, u16) {
        (W as u16, H as u16)
    }
}

#[cfg(feature = "defmt")]
impl<const W: usize, const H: usize> defmt::Format for FrameBuffer<W, H> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "FrameBuffer<{}x{}> lit={} dirty={}",
            W,
            H,
            self.lit_pixels(),
            self.dirty
        );
    }
}

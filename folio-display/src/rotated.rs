//! Rotation decorator
//!
//! Applies the configured rotation as a fixed coordinate transform in
//! front of any backend. The engine and page callbacks work in logical
//! coordinates; this wrapper remaps them to the physical panel, and for
//! quarter turns swaps the reported dimensions.

use folio_core::{DisplayBackend, DisplayError, Rotation};

/// Backend wrapper rotating all drawing by a fixed amount
pub struct Rotated<B> {
    inner: B,
    rotation: Rotation,
}

impl<B: DisplayBackend> Rotated<B> {
    /// Wrap a backend with the given rotation
    pub fn new(inner: B, rotation: Rotation) -> Self {
        Self { inner, rotation }
    }

    /// The configured rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// The wrapped backend
    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// The wrapped backend, mutably
    pub fn inner_mut(&mut self) -> &mut B {
        &mut self.inner
    }

    /// Logical dimensions seen by callers
    fn logical_dimensions(&self) -> (u16, u16) {
        let (pw, ph) = self.inner.dimensions();
        match self.rotation {
            Rotation::Deg0 | Rotation::Deg180 => (pw, ph),
            Rotation::Deg90 | Rotation::Deg270 => (ph, pw),
        }
    }
}

impl<B: DisplayBackend> DisplayBackend for Rotated<B> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.inner.clear()
    }

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        let (lw, lh) = self.logical_dimensions();
        if x >= lw || y >= lh {
            return Err(DisplayError::InvalidCoordinates);
        }
        // Clip in logical space so the transform below cannot underflow
        let width = width.min(lw - x);
        let height = height.min(lh - y);

        let (pw, ph) = self.inner.dimensions();
        let (px, py, pwidth, pheight) = match self.rotation {
            Rotation::Deg0 => (x, y, width, height),
            Rotation::Deg90 => (pw - y - height, x, height, width),
            Rotation::Deg180 => (pw - x - width, ph - y - height, width, height),
            Rotation::Deg270 => (y, ph - x - width, height, width),
        };
        self.inner.fill_rect(px, py, pwidth, pheight)
    }

    fn dimensions(&self) -> (u16, u16) {
        self.logical_dimensions()
    }
}

//! Diagnostic test card
//!
//! A fixed pattern for checking orientation, geometry, and that the
//! full frame reaches the panel: outer border, center crosshair, and a
//! solid block in the top-left corner to make rotation obvious.

use crate::backend::{DisplayBackend, DisplayError};

/// Corner marker edge length in pixels
const MARKER: u16 = 4;

/// Draw the test card into the target
///
/// Drawn with the backend primitives only; panels too small for the
/// pattern get as much of it as fits.
pub fn draw<D: DisplayBackend>(target: &mut D) -> Result<(), DisplayError> {
    let (width, height) = target.dimensions();
    if width == 0 || height == 0 {
        return Ok(());
    }

    target.clear()?;

    // Outer border
    target.fill_rect(0, 0, width, 1)?;
    target.fill_rect(0, height - 1, width, 1)?;
    target.fill_rect(0, 0, 1, height)?;
    target.fill_rect(width - 1, 0, 1, height)?;

    // Center crosshair
    target.fill_rect(width / 2, 0, 1, height)?;
    target.fill_rect(0, height / 2, width, 1)?;

    // Top-left orientation marker
    let marker_w = MARKER.min(width);
    let marker_h = MARKER.min(height);
    target.fill_rect(0, 0, marker_w, marker_h)?;

    Ok(())
}

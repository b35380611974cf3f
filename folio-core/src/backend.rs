//! Display backend trait
//!
//! Defines the interface to the externally owned frame target. The
//! engine only ever clears the target and hands it to page callbacks;
//! the test card additionally uses the rectangle primitive.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for the frame target a page
/// renders into. Implementations handle the specifics of OLED, TFT,
/// e-paper, or in-memory buffers.
pub trait DisplayBackend {
    /// Blank the entire frame target
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Fill a rectangle
    ///
    /// - `x`, `y`: top-left corner in pixels
    /// - `width`, `height`: extent in pixels
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError>;

    /// Get pixel dimensions as (width, height)
    fn dimensions(&self) -> (u16, u16);
}

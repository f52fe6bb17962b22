//! Caller-facing display interface
//!
//! The monitor only needs four things from a display: bring it up, wipe
//! it, show a block of text, and optionally scroll part of it.

use core::fmt;

use tablet_hal::BusError;

use crate::scroll::ScrollConfig;

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// A bus transaction failed
    Bus(BusError),
    /// Page, column, length or scroll parameter outside the panel
    OutOfRange,
}

impl From<BusError> for DisplayError {
    fn from(e: BusError) -> Self {
        DisplayError::Bus(e)
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Bus(e) => write!(f, "display bus: {}", e),
            DisplayError::OutOfRange => f.write_str("display coordinates out of range"),
        }
    }
}

/// Text display
///
/// Implementations talk to the hardware directly; there is no frame
/// buffer, so every call is visible as soon as it returns.
pub trait TextDisplay {
    /// Send the power-up configuration
    fn initialize(&mut self) -> Result<(), DisplayError>;

    /// Blank the whole panel
    fn display_clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text from the top-left corner
    ///
    /// `\n` moves to the next line; characters past the end of a line are
    /// dropped.
    fn display_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Start hardware scrolling
    fn display_scroll(&mut self, config: &ScrollConfig) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);

    /// Check if the display has been initialized
    fn is_ready(&self) -> bool;
}

//! Segment display driver trait for TM1637-family displays

use crate::config::DisplayPins;
use crate::font::Glyph;

/// Driver result code for success on the wire
pub const CODE_SUCCESS: u8 = 0;
/// Driver result code for unusable clock/data pins
pub const CODE_PINS: u8 = 1;
/// Driver result code for a missing acknowledge bit
pub const CODE_ACK: u8 = 2;

/// Errors reported by a segment display driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Clock and data pins are not usable (e.g. identical or not wired)
    Pins,
    /// The controller chip did not acknowledge a transfer
    Ack,
    /// Any other driver-specific failure code
    Other(u8),
}

impl DriverError {
    /// Decode a raw driver result code
    ///
    /// Returns `None` for [`CODE_SUCCESS`].
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            CODE_SUCCESS => None,
            CODE_PINS => Some(Self::Pins),
            CODE_ACK => Some(Self::Ack),
            other => Some(Self::Other(other)),
        }
    }

    /// Raw driver result code
    pub const fn code(self) -> u8 {
        match self {
            Self::Pins => CODE_PINS,
            Self::Ack => CODE_ACK,
            Self::Other(code) => code,
        }
    }
}

/// Trait for 7-segment display drivers
///
/// Abstracts the TM1637 chip: the implementation owns the digit buffer,
/// the font and the wire protocol. The application only writes text,
/// flushes it and drives the visual effects.
pub trait SegmentDriver {
    /// Initialise the bus and the chip
    fn begin(&mut self) -> Result<(), DriverError>;

    /// Number of digits the display was configured with
    fn digits(&self) -> u8;

    /// Set the lowest contrast level
    fn set_contrast_min(&mut self) -> Result<(), DriverError>;

    /// Set the highest contrast level
    fn set_contrast_max(&mut self) -> Result<(), DriverError>;

    /// Install the character-to-segment table used by [`print_text`]
    ///
    /// [`print_text`]: SegmentDriver::print_text
    fn set_font(&mut self, font: &'static [Glyph]);

    /// Switch the display on
    fn display_on(&mut self) -> Result<(), DriverError>;

    /// Write text into the digit buffer starting at `digit`
    ///
    /// Nothing is sent to the chip until [`display`](SegmentDriver::display).
    fn print_text(&mut self, text: &str, digit: u8);

    /// Send the digit buffer to the chip
    fn display(&mut self) -> Result<(), DriverError>;

    /// Toggle the display between on and off
    fn display_toggle(&mut self) -> Result<(), DriverError>;

    /// Advance the breathing (fade in/out) effect by one step
    fn display_breath(&mut self) -> Result<(), DriverError>;
}

/// Display hardware that can be built directly from a pin configuration
pub trait FromPins: Sized {
    /// Create an instance for the given clock/data pins and digit count
    fn from_pins(pins: &DisplayPins) -> Self;
}

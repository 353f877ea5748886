//! Buffered TM1637 segment driver
//!
//! Keeps the digit buffer, contrast and visibility in RAM and hands
//! complete frames to a [`SegmentBus`], which owns the two-wire protocol.

use tm7_core::config::{DisplayPins, MAX_DIGITS};
use tm7_core::font::{lookup, Glyph, SEG_DP};
use tm7_core::traits::{DriverError, FromPins, SegmentDriver};

/// Lowest TM1637 pulse-width (contrast) setting
pub const CONTRAST_MIN: u8 = 0;
/// Highest TM1637 pulse-width (contrast) setting
pub const CONTRAST_MAX: u8 = 7;

const BUFFER_LEN: usize = MAX_DIGITS as usize;

/// Wire-level access to a TM1637 chip
pub trait SegmentBus {
    /// Check that the chip answers on the configured pins
    fn probe(&mut self) -> Result<(), DriverError>;

    /// Write segment masks to consecutive digit registers from `start`
    fn write_segments(&mut self, start: u8, segments: &[u8]) -> Result<(), DriverError>;

    /// Write the display control register
    fn write_control(&mut self, on: bool, contrast: u8) -> Result<(), DriverError>;
}

/// 7-segment driver with an in-memory digit buffer
pub struct BufferedDriver<B> {
    bus: B,
    digits: u8,
    buffer: [u8; BUFFER_LEN],
    font: &'static [Glyph],
    contrast: u8,
    on: bool,
    /// Direction of the breathing effect
    rising: bool,
}

impl<B: SegmentBus> BufferedDriver<B> {
    /// Create a driver for `digits` positions (at most `MAX_DIGITS`)
    pub fn new(bus: B, digits: u8) -> Self {
        Self {
            bus,
            digits: digits.min(MAX_DIGITS),
            buffer: [0; BUFFER_LEN],
            font: &[],
            contrast: CONTRAST_MAX,
            on: false,
            rising: false,
        }
    }

    /// Set an explicit contrast level (clamped to `CONTRAST_MAX`)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DriverError> {
        self.contrast = contrast.min(CONTRAST_MAX);
        self.write_control()
    }

    /// Current contrast level
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Check if the display is switched on
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Segment masks of the buffered digits
    pub fn segments(&self) -> &[u8] {
        &self.buffer[..usize::from(self.digits)]
    }

    /// Clear the digit buffer (not sent until `display`)
    pub fn clear(&mut self) {
        self.buffer = [0; BUFFER_LEN];
    }

    /// Get access to the underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Get mutable access to the underlying bus
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    fn write_control(&mut self) -> Result<(), DriverError> {
        self.bus.write_control(self.on, self.contrast)
    }
}

impl<B: SegmentBus> SegmentDriver for BufferedDriver<B> {
    fn begin(&mut self) -> Result<(), DriverError> {
        self.bus.probe()?;
        self.clear();
        self.on = true;
        self.bus.write_segments(0, &self.buffer[..usize::from(self.digits)])?;
        self.write_control()
    }

    fn digits(&self) -> u8 {
        self.digits
    }

    fn set_contrast_min(&mut self) -> Result<(), DriverError> {
        self.set_contrast(CONTRAST_MIN)
    }

    fn set_contrast_max(&mut self) -> Result<(), DriverError> {
        self.set_contrast(CONTRAST_MAX)
    }

    fn set_font(&mut self, font: &'static [Glyph]) {
        self.font = font;
    }

    fn display_on(&mut self) -> Result<(), DriverError> {
        self.on = true;
        self.write_control()
    }

    /// Replace the buffer from `digit` to the last position with `text`
    ///
    /// A `.` lights the decimal point of the preceding character instead
    /// of taking a position. Characters past the last digit are dropped.
    fn print_text(&mut self, text: &str, digit: u8) {
        let start = usize::from(digit);
        let end = usize::from(self.digits);
        if start >= end {
            return;
        }
        self.buffer[start..end].fill(0);

        let mut pos = start;
        for ch in text.chars() {
            if ch == '.' && pos > start {
                self.buffer[pos - 1] |= SEG_DP;
                continue;
            }
            if pos >= end {
                break;
            }
            self.buffer[pos] = if ch == '.' {
                SEG_DP
            } else {
                lookup(self.font, ch)
            };
            pos += 1;
        }
    }

    fn display(&mut self) -> Result<(), DriverError> {
        self.bus.write_segments(0, &self.buffer[..usize::from(self.digits)])
    }

    fn display_toggle(&mut self) -> Result<(), DriverError> {
        self.on = !self.on;
        self.write_control()
    }

    /// Step the contrast one level towards the current breathing direction
    fn display_breath(&mut self) -> Result<(), DriverError> {
        if self.contrast >= CONTRAST_MAX {
            self.rising = false;
        } else if self.contrast == CONTRAST_MIN {
            self.rising = true;
        }
        self.contrast = if self.rising {
            self.contrast + 1
        } else {
            self.contrast - 1
        };
        self.write_control()
    }
}

impl<B: SegmentBus + FromPins> FromPins for BufferedDriver<B> {
    fn from_pins(pins: &DisplayPins) -> Self {
        Self::new(B::from_pins(pins), pins.digits)
    }
}

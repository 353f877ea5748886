//! Configuration types
//!
//! Pin assignment for the display and the fixed timing/size constants
//! the controller is built around.

pub mod pins;

pub use pins::*;

/// Blink/breath effect period in milliseconds
pub const PERIOD_BLINK_MS: u32 = 500;

/// Digit count used when none is configured
pub const DEFAULT_DIGITS: u8 = 4;

/// Smallest digit count that leaves room for a framed error code
pub const MIN_DIGITS: u8 = 2;

/// Largest digit count a TM1637 can drive
pub const MAX_DIGITS: u8 = 6;

/// Capacity of rendered text buffers
///
/// Large enough for any `f32` formatted with one decimal digit.
pub const TEXT_CAPACITY: usize = 48;

//! Display pin configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{DEFAULT_DIGITS, MAX_DIGITS, MIN_DIGITS};

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Clock and data share the same GPIO
    PinConflict,
    /// Digit count outside `MIN_DIGITS..=MAX_DIGITS`
    DigitCount(u8),
}

/// Clock/data pins and digit count of a TM1637 display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayPins {
    /// GPIO pin number for the serial clock (CLK)
    pub clk: u8,
    /// GPIO pin number for the serial data (DIO)
    pub dio: u8,
    /// Number of 7-segment digits in use
    pub digits: u8,
}

impl DisplayPins {
    /// Create a pin config with the default digit count
    pub const fn new(clk: u8, dio: u8) -> Self {
        Self {
            clk,
            dio,
            digits: DEFAULT_DIGITS,
        }
    }

    /// Override the digit count
    pub const fn with_digits(mut self, digits: u8) -> Self {
        self.digits = digits;
        self
    }

    /// Check that the pins are distinct and the digit count is supported
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clk == self.dio {
            return Err(ConfigError::PinConflict);
        }
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&self.digits) {
            return Err(ConfigError::DigitCount(self.digits));
        }
        Ok(())
    }
}

impl Default for DisplayPins {
    fn default() -> Self {
        // Common wiring on Arduino-style TM1637 shields
        Self::new(2, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_digits() {
        let pins = DisplayPins::new(5, 6);
        assert_eq!(pins.clk, 5);
        assert_eq!(pins.dio, 6);
        assert_eq!(pins.digits, DEFAULT_DIGITS);
    }

    #[test]
    fn test_with_digits() {
        let pins = DisplayPins::new(5, 6).with_digits(6);
        assert_eq!(pins.digits, 6);
        assert!(pins.validate().is_ok());
    }

    #[test]
    fn test_validate_pin_conflict() {
        let pins = DisplayPins::new(4, 4);
        assert_eq!(pins.validate(), Err(ConfigError::PinConflict));
    }

    #[test]
    fn test_validate_digit_range() {
        assert_eq!(
            DisplayPins::new(2, 3).with_digits(1).validate(),
            Err(ConfigError::DigitCount(1))
        );
        assert_eq!(
            DisplayPins::new(2, 3).with_digits(7).validate(),
            Err(ConfigError::DigitCount(7))
        );
        assert!(DisplayPins::new(2, 3).with_digits(2).validate().is_ok());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(DisplayPins::default().validate().is_ok());
    }
}

//! Application result codes
//!
//! The controller reports driver failures on the display itself as a
//! numeric code, so every driver outcome maps onto one of these values.

use crate::traits::DriverError;

/// Application-level result of a display operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ResultCode {
    /// Operation succeeded
    Success = 0,
    /// Clock/data pin configuration error
    PinsError = 1,
    /// Missing acknowledge from the display chip
    AckError = 2,
    /// Any driver outcome without a dedicated code
    Unknown = 255,
}

impl ResultCode {
    /// Translate a driver outcome
    pub const fn from_driver(result: Result<(), DriverError>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(DriverError::Pins) => Self::PinsError,
            Err(DriverError::Ack) => Self::AckError,
            Err(_) => Self::Unknown,
        }
    }

    /// Translate a raw driver result code
    pub const fn from_driver_code(code: u8) -> Self {
        match DriverError::from_code(code) {
            None => Self::Success,
            Some(err) => Self::from_driver(Err(err)),
        }
    }

    /// Numeric value shown by the error display
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Check for success
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<DriverError> for ResultCode {
    fn from(err: DriverError) -> Self {
        Self::from_driver(Err(err))
    }
}

impl From<Result<(), DriverError>> for ResultCode {
    fn from(result: Result<(), DriverError>) -> Self {
        Self::from_driver(result)
    }
}

//! Board-agnostic application logic for TM1637 7-segment displays
//!
//! This crate contains everything that does not depend on a specific
//! display bus or timer peripheral:
//!
//! - Hardware abstraction traits (segment driver, periodic timer, clock)
//! - The [`DisplayController`] with blink/breath effects and data mode
//! - Application result codes and driver error translation
//! - The 7-segment font table
//! - Pin and timing configuration

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod font;
pub mod result;
pub mod traits;

pub use config::{ConfigError, DisplayPins};
pub use controller::DisplayController;
pub use result::ResultCode;

//! Hardware abstraction traits
//!
//! These traits define the interface between the display controller
//! and hardware-specific implementations.

pub mod display;
pub mod timer;

pub use display::{DriverError, FromPins, SegmentDriver};
pub use timer::{Clock, PeriodicTimer};

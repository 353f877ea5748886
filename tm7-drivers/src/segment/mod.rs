//! 7-segment display drivers

pub mod buffered;

pub use buffered::{BufferedDriver, SegmentBus, CONTRAST_MAX, CONTRAST_MIN};

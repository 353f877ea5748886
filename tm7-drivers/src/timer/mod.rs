//! Periodic timer implementations

pub mod elapsed;
#[cfg(feature = "embassy")]
pub mod embassy;

pub use elapsed::ElapsedTimer;
#[cfg(feature = "embassy")]
pub use embassy::{EmbassyClock, EmbassyTimer};

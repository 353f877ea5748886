//! embassy-time clock source

use embassy_time::Instant;
use tm7_core::traits::Clock;

use super::ElapsedTimer;

/// Millisecond clock reading the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation wraps after ~49 days; the timer compares with wrapping_sub
        Instant::now().as_millis() as u32
    }
}

/// Periodic timer driven by embassy-time
pub type EmbassyTimer = ElapsedTimer<EmbassyClock>;

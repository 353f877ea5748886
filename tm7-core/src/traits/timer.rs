//! Periodic timer and time source traits

/// Monotonic millisecond time source
///
/// The counter may wrap; consumers compare with wrapping arithmetic.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed point
    fn now_ms(&self) -> u32;
}

/// Trait for a cooperative periodic timer
///
/// The timer never sleeps or interrupts. The owner polls it from its main
/// loop and acts whenever [`poll`](PeriodicTimer::poll) reports a due period.
pub trait PeriodicTimer {
    /// Change the period in milliseconds
    fn set_period(&mut self, period_ms: u32);

    /// Current period in milliseconds
    fn period(&self) -> u32;

    /// Stop reporting due periods
    fn halt(&mut self);

    /// Start reporting due periods again
    fn resume(&mut self);

    /// Check if the timer is running (not halted)
    fn is_active(&self) -> bool;

    /// Returns `true` once per elapsed period while active
    fn poll(&mut self) -> bool;
}

//! Elapsed-time periodic timer
//!
//! Compares the clock against the last tick on every poll. Nothing sleeps;
//! the owner must poll often enough for the period it wants.

use tm7_core::traits::{Clock, PeriodicTimer};

/// Periodic timer over a millisecond [`Clock`]
#[derive(Debug, Clone)]
pub struct ElapsedTimer<C> {
    clock: C,
    period_ms: u32,
    /// Time of the last reported period (or of the last resume)
    last_ms: u32,
    active: bool,
}

impl<C: Clock> ElapsedTimer<C> {
    /// Create a running timer
    pub fn new(clock: C, period_ms: u32) -> Self {
        let last_ms = clock.now_ms();
        Self {
            clock,
            period_ms,
            last_ms,
            active: true,
        }
    }

    /// Milliseconds since the last reported period
    pub fn elapsed_ms(&self) -> u32 {
        self.clock.now_ms().wrapping_sub(self.last_ms)
    }

    /// Get access to the underlying clock
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock + Default> Default for ElapsedTimer<C> {
    fn default() -> Self {
        Self::new(C::default(), 0)
    }
}

impl<C: Clock> PeriodicTimer for ElapsedTimer<C> {
    fn set_period(&mut self, period_ms: u32) {
        self.period_ms = period_ms;
    }

    fn period(&self) -> u32 {
        self.period_ms
    }

    fn halt(&mut self) {
        self.active = false;
    }

    fn resume(&mut self) {
        if !self.active {
            // First period counts from the resume, not from the halt
            self.last_ms = self.clock.now_ms();
            self.active = true;
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn poll(&mut self) -> bool {
        if !self.active {
            return false;
        }
        let now = self.clock.now_ms();
        if now.wrapping_sub(self.last_ms) >= self.period_ms {
            self.last_ms = now;
            true
        } else {
            false
        }
    }
}

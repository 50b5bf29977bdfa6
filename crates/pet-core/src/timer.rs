//! `PeriodicTimer` — an owned, reschedulable fixed-period trigger.
//!
//! # Why this exists
//!
//! The original pets scheduled work with host-runtime interval callbacks that
//! had to be cancelled on teardown or whenever a dependency changed; a missed
//! cancellation leaked a tick that could write to stale state.  Modelling the
//! timer as plain data owned by the pet removes that failure class: dropping
//! the pet drops its timers, and a dependency change just calls
//! [`reset`](PeriodicTimer::reset).
//!
//! The timer never fires "catch-up" bursts: however far `now` has moved past
//! `next_due` (e.g. after a long drag), a single `fire` consumes the elapsed
//! period and the next due tick is `now + period`.

use crate::Tick;

/// A fixed-period trigger evaluated against the simulation clock.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodicTimer {
    /// Ticks between firings.  Never zero.
    period: u64,
    /// The earliest tick at which the timer fires next.
    next_due: Tick,
}

impl PeriodicTimer {
    /// Create a timer that first fires `period` ticks after `now`.
    ///
    /// A zero `period` is clamped to 1 so the timer cannot fire every call
    /// unboundedly within a single tick.
    pub fn new(period: u64, now: Tick) -> Self {
        let period = period.max(1);
        Self {
            period,
            next_due: now + period,
        }
    }

    /// `true` exactly when the period has elapsed; reschedules on fire.
    pub fn fire(&mut self, now: Tick) -> bool {
        if now >= self.next_due {
            self.next_due = now + self.period;
            true
        } else {
            false
        }
    }

    /// Restart the period from `now` without firing.  Called when a
    /// dependency of the timed work changes (e.g. the container is resized).
    pub fn reset(&mut self, now: Tick) {
        self.next_due = now + self.period;
    }

    /// Ticks between firings.
    #[inline]
    pub fn period(&self) -> u64 {
        self.period
    }

    /// The next tick at which [`fire`](Self::fire) will return `true`.
    #[inline]
    pub fn next_due(&self) -> Tick {
        self.next_due
    }
}

// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Settle timer: a single re-schedulable deadline driven by caller time.
//!
//! ## Usage
//!
//! The arbiter never reads a clock. Callers pass a monotonic timestamp (a
//! [`Duration`] since any fixed epoch) into every time-dependent call, and poll
//! with [`SettleTimer::fire_due`] from their frame or event loop.
//!
//! Scheduling while a deadline is pending replaces it, so a burst of scroll
//! changes behaves as a debounce: only the last change's deadline fires.
//!
//! ```
//! use core::time::Duration;
//! use tether_arbiter::settle::SettleTimer;
//!
//! let ms = Duration::from_millis;
//! let mut t = SettleTimer::new();
//! t.schedule(ms(0), ms(100));
//! t.schedule(ms(60), ms(100));
//! assert!(!t.fire_due(ms(120)));
//! assert!(t.fire_due(ms(160)));
//! assert!(!t.fire_due(ms(500)));
//! ```

use core::time::Duration;

/// One pending deadline at most.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SettleTimer {
    deadline: Option<Duration>,
}

impl SettleTimer {
    /// Create an idle timer.
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire at `now + delay`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        let at = now.saturating_add(delay);
        log::trace!("settle scheduled for {at:?}");
        self.deadline = Some(at);
    }

    /// Drop the pending deadline, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// The pending deadline.
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Whether a deadline is pending.
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if `now` has reached it.
    ///
    /// Returns `true` exactly once per scheduled deadline.
    pub fn fire_due(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_at_deadline_once() {
        let mut t = SettleTimer::new();
        t.schedule(ms(10), ms(100));
        assert_eq!(t.deadline(), Some(ms(110)));
        assert!(!t.fire_due(ms(109)));
        assert!(t.fire_due(ms(110)));
        assert!(!t.is_pending());
        assert!(!t.fire_due(ms(111)));
    }

    #[test]
    fn reschedule_supersedes_pending() {
        let mut t = SettleTimer::new();
        t.schedule(ms(0), ms(100));
        t.schedule(ms(90), ms(100));
        assert!(!t.fire_due(ms(100)));
        assert!(t.fire_due(ms(190)));
    }

    #[test]
    fn cancel_discards() {
        let mut t = SettleTimer::new();
        assert!(!t.cancel());
        t.schedule(ms(0), ms(5));
        assert!(t.cancel());
        assert!(!t.fire_due(ms(1_000)));
    }

    #[test]
    fn zero_delay_fires_on_next_poll() {
        let mut t = SettleTimer::new();
        t.schedule(ms(7), Duration::ZERO);
        assert!(t.fire_due(ms(7)));
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let mut t = SettleTimer::new();
        t.schedule(Duration::MAX, ms(1));
        assert_eq!(t.deadline(), Some(Duration::MAX));
    }
}

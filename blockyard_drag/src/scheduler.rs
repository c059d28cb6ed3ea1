// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Periodic hit-test scheduling driven by host timestamps.

/// A repeating deadline, polled with millisecond timestamps.
///
/// The host decides where time comes from: a timer callback, an animation
/// frame, or a test clock. Polling late never queues up missed ticks; the
/// next deadline is always measured from the poll that fired.
///
/// ```
/// use blockyard_drag::HitTestTicker;
///
/// let mut ticker = HitTestTicker::new(20, 100);
/// assert_eq!(ticker.next_deadline(), 120);
/// assert!(!ticker.poll(119));
/// assert!(ticker.poll(175));
/// assert_eq!(ticker.next_deadline(), 195);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HitTestTicker {
    interval_ms: u64,
    next_due: u64,
}

impl HitTestTicker {
    /// Start a ticker at `now` that first fires `interval_ms` later.
    #[must_use]
    pub const fn new(interval_ms: u64, now: u64) -> Self {
        Self {
            interval_ms,
            next_due: now.saturating_add(interval_ms),
        }
    }

    /// The tick interval.
    #[must_use]
    pub const fn interval(&self) -> u64 {
        self.interval_ms
    }

    /// Timestamp at which the next poll fires.
    #[must_use]
    pub const fn next_deadline(&self) -> u64 {
        self.next_due
    }

    /// Returns `true` at most once per deadline, then reschedules from `now`.
    pub fn poll(&mut self, now: u64) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now.saturating_add(self.interval_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::HitTestTicker;

    #[test]
    fn fires_on_the_deadline() {
        let mut ticker = HitTestTicker::new(20, 0);
        assert!(!ticker.poll(0));
        assert!(!ticker.poll(19));
        assert!(ticker.poll(20));
        assert!(!ticker.poll(20));
        assert!(ticker.poll(40));
    }

    #[test]
    fn late_polls_coalesce() {
        let mut ticker = HitTestTicker::new(20, 0);
        assert!(ticker.poll(1_000));
        assert!(!ticker.poll(1_001));
        assert_eq!(ticker.next_deadline(), 1_020);
    }

    #[test]
    fn zero_interval_fires_every_poll() {
        let mut ticker = HitTestTicker::new(0, 5);
        assert!(ticker.poll(5));
        assert!(ticker.poll(5));
    }

    #[test]
    fn deadline_saturates() {
        let ticker = HitTestTicker::new(20, u64::MAX - 5);
        assert_eq!(ticker.next_deadline(), u64::MAX);
    }
}

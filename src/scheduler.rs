use std::time::{Duration, Instant};

/// Repeating tick deadline with a mutable interval.
///
/// The shell owns one of these and asks it every loop iteration whether a
/// gameplay tick is due. Disarming stops the deadline entirely, which is how
/// the tick source is silenced after game over; arming again starts a fresh
/// cadence from the given instant.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    interval: Duration,
    deadline: Option<Instant>,
}

impl TickScheduler {
    /// Creates a disarmed scheduler with the given interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Starts (or restarts) the cadence, first firing one interval from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Stops the cadence until the next `arm` call.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Returns true while a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Updates the interval used for subsequent deadlines. The currently
    /// pending deadline is left in place, matching a timer whose delay is
    /// changed while it is counting down.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Returns true when a tick is due at `now`, scheduling the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

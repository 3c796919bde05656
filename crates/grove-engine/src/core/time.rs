use std::cell::Cell;
use std::time::Instant;

/// Monotonic millisecond clock. Sampled once per frame by the frame driver.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin.
    fn ticks_ms(&self) -> u64;
}

/// Wall clock backed by `std::time::Instant`, counting from construction.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn ticks_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for deterministic simulation and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn ticks_ms(&self) -> u64 {
        self.now.get()
    }
}

/// A polled lock-out window: active from `start` until strictly more than
/// `duration` milliseconds have passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    duration: u64,
    started_at: u64,
    active: bool,
}

impl Cooldown {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration: duration_ms,
            started_at: 0,
            active: false,
        }
    }

    /// Start (or restart) the window at `now`.
    pub fn trigger(&mut self, now: u64) {
        self.active = true;
        self.started_at = now;
    }

    /// Clear the flag once the window has elapsed. Returns true if it just expired.
    pub fn poll(&mut self, now: u64) -> bool {
        if self.active && now.saturating_sub(self.started_at) > self.duration {
            self.active = false;
            return true;
        }
        false
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn started_at(&self) -> u64 {
        self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.ticks_ms(), 100);
        clock.advance(16);
        assert_eq!(clock.ticks_ms(), 116);
        clock.set(5);
        assert_eq!(clock.ticks_ms(), 5);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.ticks_ms();
        let b = clock.ticks_ms();
        assert!(b >= a);
    }

    #[test]
    fn cooldown_expires_strictly_after_duration() {
        let mut cd = Cooldown::new(400);
        cd.trigger(1000);
        assert!(cd.is_active());

        assert!(!cd.poll(1399));
        assert!(!cd.poll(1400)); // exactly 400 elapsed: still active
        assert!(cd.is_active());

        assert!(cd.poll(1401));
        assert!(!cd.is_active());
        // Already expired; no second edge
        assert!(!cd.poll(2000));
    }

    #[test]
    fn retrigger_restarts_window() {
        let mut cd = Cooldown::new(10);
        cd.trigger(0);
        cd.poll(11);
        cd.trigger(50);
        assert!(!cd.poll(60));
        assert!(cd.poll(61));
    }
}

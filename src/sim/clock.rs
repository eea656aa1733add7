//! Monotonic time sources and per-shape tick clocks
//!
//! Time is carried as `f64` seconds since an arbitrary origin so that the
//! scheduler can be driven by a real clock or stepped by hand in tests.

use std::cell::Cell;
use std::time::Instant;

/// A monotonic time source
pub trait Clock {
    /// Seconds since the clock's origin
    fn now(&self) -> f64;
}

/// Wall clock backed by `std::time::Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-advanced clock for deterministic runs
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move time forward; negative steps are ignored
    pub fn advance(&self, seconds: f64) {
        if seconds > 0.0 {
            self.now.set(self.now.get() + seconds);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Per-shape stopwatch: when the last physics step was applied
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickClock {
    last: Option<f64>,
}

impl TickClock {
    pub fn is_running(&self) -> bool {
        self.last.is_some()
    }

    /// Restart from `now`
    pub fn restart(&mut self, now: f64) {
        self.last = Some(now);
    }

    pub fn stop(&mut self) {
        self.last = None;
    }

    /// Seconds since the last restart, or `None` if never started
    pub fn elapsed(&self, now: f64) -> Option<f64> {
        self.last.map(|last| (now - last).max(0.0))
    }

    pub fn last(&self) -> Option<f64> {
        self.last
    }
}

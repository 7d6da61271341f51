//! Battle time and the time sources that feed it.

use std::time::Instant;

/// Tracks battle time: the last update timestamp, total elapsed seconds,
/// and how many ticks have run.
///
/// Timestamps are plain seconds supplied by the caller, so the same clock
/// works under a frame timer, a fixed-interval timer, or a test that
/// advances time by hand.
#[derive(Debug, Clone, Default)]
pub struct BattleClock {
    last_update: f64,
    elapsed: f64,
    ticks: u64,
}

impl BattleClock {
    /// Create a clock whose first update is measured from `now`.
    pub fn new(now: f64) -> Self {
        Self {
            last_update: now,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    /// Restart the clock at `now`.
    pub fn reset(&mut self, now: f64) {
        *self = Self::new(now);
    }

    /// Advance to `now` and return the seconds since the previous update.
    ///
    /// Time never runs backwards: an earlier timestamp yields zero.
    pub fn advance_to(&mut self, now: f64) -> f64 {
        let delta = (now - self.last_update).max(0.0);
        self.last_update = self.last_update.max(now);
        self.elapsed += delta;
        self.ticks += 1;
        delta
    }

    /// Timestamp of the most recent update.
    pub fn last_update(&self) -> f64 {
        self.last_update
    }

    /// Total battle seconds since the last reset.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of ticks since the last reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Supplies the current time in seconds.
pub trait TimeSource {
    /// Seconds since some fixed origin.
    fn now(&self) -> f64;
}

/// Wall-clock time measured from when the source was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    /// Start measuring from this instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven time, for tests and replays.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualTime {
    now: f64,
}

impl ManualTime {
    /// Start at the given timestamp.
    pub fn starting_at(now: f64) -> Self {
        Self { now }
    }

    /// Move time forward by `seconds`. Returns the new timestamp.
    pub fn advance(&mut self, seconds: f64) -> f64 {
        self.now += seconds.max(0.0);
        self.now
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> f64 {
        self.now
    }
}

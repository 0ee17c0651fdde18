use crate::constants::AUTOPLAY_INTERVAL;
use std::time::Duration;

/// Autoplay clock for a carousel, advanced by frame time.
///
/// A carousel owns exactly one of these, so there is never more than one
/// autoplay period in flight. Pausing discards accumulated time and resuming
/// starts a fresh period, matching a cleared-and-recreated interval.
#[derive(Clone, Debug)]
pub struct Autoplay {
    interval: Duration,
    elapsed: Duration,
    paused: bool,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(AUTOPLAY_INTERVAL)
    }
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            paused: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.elapsed = Duration::ZERO;
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.elapsed = Duration::ZERO;
    }

    /// Advance by `dt`; returns `true` when a slide step is due. At most one
    /// step fires per call so a long stall does not fast-forward the carousel.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.paused || self.interval.is_zero() {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }
        self.elapsed = Duration::from_nanos(
            (self.elapsed.as_nanos() % self.interval.as_nanos()) as u64,
        );
        true
    }
}

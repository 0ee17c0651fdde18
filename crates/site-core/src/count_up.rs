use crate::constants::{COUNT_UP_DURATION, COUNT_UP_TICK};
use std::time::Duration;

/// Linear count from zero to an integer target in fixed ticks.
///
/// Each tick adds `target / (duration / tick)`. While the running value is
/// below the target the floor is displayed; the tick that reaches it yields
/// exactly `target` and ends the animation.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: i64,
    step: f64,
    current: f64,
    tick: Duration,
    pending: Duration,
    finished: bool,
}

impl CountUp {
    pub fn new(target: i64) -> Self {
        Self::with_timing(target, COUNT_UP_DURATION, COUNT_UP_TICK)
    }

    pub fn with_timing(target: i64, duration: Duration, tick: Duration) -> Self {
        let tick = tick.max(Duration::from_millis(1));
        let ticks = (duration.as_secs_f64() / tick.as_secs_f64()).max(1.0);
        Self {
            target,
            step: target as f64 / ticks,
            current: 0.0,
            tick,
            pending: Duration::ZERO,
            finished: false,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn step_once(&mut self) -> Option<i64> {
        if self.finished {
            return None;
        }
        self.current += self.step;
        if self.current >= self.target as f64 {
            self.finished = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as i64)
        }
    }

    /// Feed elapsed frame time; runs every whole tick it covers and returns
    /// the last value to display, if any tick ran.
    pub fn advance(&mut self, dt: Duration) -> Option<i64> {
        self.pending += dt;
        let mut shown = None;
        while !self.finished && self.pending >= self.tick {
            self.pending -= self.tick;
            if let Some(v) = self.step_once() {
                shown = Some(v);
            }
        }
        shown
    }
}

impl Iterator for CountUp {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.step_once()
    }
}

/// Parse a `data-count` attribute: the leading integer, ignoring any
/// trailing text.
#[inline]
pub fn parse_count_target(raw: &str) -> Option<i64> {
    crate::parse_leading_int(raw)
}

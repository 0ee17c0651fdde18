use crate::constants::SWIPE_THRESHOLD_PX;
use crate::ring::Step;

/// Classify a horizontal touch gesture. Dragging left (start to the right of
/// end) advances; dragging right goes back. The threshold is exclusive.
#[inline]
pub fn classify_swipe(start_x: f64, end_x: f64, threshold: f64) -> Option<Step> {
    let diff = start_x - end_x;
    if diff > threshold {
        Some(Step::Next)
    } else if diff < -threshold {
        Some(Step::Prev)
    } else {
        None
    }
}

/// Tracks one touch gesture between `touchstart` and `touchend`.
#[derive(Clone, Copy, Debug)]
pub struct SwipeTracker {
    start_x: f64,
    threshold: f64,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self {
            start_x: 0.0,
            threshold: SWIPE_THRESHOLD_PX,
        }
    }
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = x;
    }

    pub fn end(&mut self, x: f64) -> Option<Step> {
        classify_swipe(self.start_x, x, self.threshold)
    }
}

use crate::constants::FOLLOWER_SMOOTHING;
use glam::Vec2;

/// Cursor outline that trails the pointer.
///
/// The trailing point is an exponential moving average of the pointer
/// position, stepped once per animation frame.
#[derive(Clone, Copy, Debug)]
pub struct PointerFollower {
    pub target: Vec2,
    pub trail: Vec2,
    smoothing: f32,
}

impl Default for PointerFollower {
    fn default() -> Self {
        Self::new(FOLLOWER_SMOOTHING)
    }
}

impl PointerFollower {
    pub fn new(smoothing: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            trail: Vec2::ZERO,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    /// Move the trail one frame toward the target and return it.
    #[inline]
    pub fn step(&mut self) -> Vec2 {
        self.trail += (self.target - self.trail) * self.smoothing;
        self.trail
    }
}

//! Five-slot ring layout for the venue tour carousel.

use crate::constants::RING_VISIBLE_REACH;
use smallvec::SmallVec;

/// Visual slot a slide occupies relative to the centered slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotPosition {
    FarLeft,
    Left,
    Center,
    Right,
    FarRight,
    Hidden,
}

impl SlotPosition {
    pub fn from_offset(offset: isize) -> Self {
        match offset {
            -2 => SlotPosition::FarLeft,
            -1 => SlotPosition::Left,
            0 => SlotPosition::Center,
            1 => SlotPosition::Right,
            2 => SlotPosition::FarRight,
            _ => SlotPosition::Hidden,
        }
    }

    /// Value written to the slide's `data-position` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            SlotPosition::FarLeft => "far-left",
            SlotPosition::Left => "left",
            SlotPosition::Center => "center",
            SlotPosition::Right => "right",
            SlotPosition::FarRight => "far-right",
            SlotPosition::Hidden => "hidden",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "far-left" => Some(SlotPosition::FarLeft),
            "left" => Some(SlotPosition::Left),
            "center" => Some(SlotPosition::Center),
            "right" => Some(SlotPosition::Right),
            "far-right" => Some(SlotPosition::FarRight),
            "hidden" => Some(SlotPosition::Hidden),
            _ => None,
        }
    }

    /// Navigation triggered by clicking a slide sitting in this slot.
    pub fn click_step(self) -> Option<Step> {
        match self {
            SlotPosition::FarLeft | SlotPosition::Left => Some(Step::Prev),
            SlotPosition::Right | SlotPosition::FarRight => Some(Step::Next),
            SlotPosition::Center | SlotPosition::Hidden => None,
        }
    }
}

/// A single navigation step, shared by buttons, keys, swipes and clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

/// Signed offset of `index` from `current`, folded once around a ring of
/// `len` slides. Offsets beyond the visible reach after folding stay as-is and
/// map to [`SlotPosition::Hidden`].
pub fn relative_offset(index: usize, current: usize, len: usize) -> isize {
    let len = len as isize;
    let mut p = index as isize - current as isize;
    if p < -RING_VISIBLE_REACH {
        p += len;
    }
    if p > RING_VISIBLE_REACH {
        p -= len;
    }
    p
}

#[inline]
pub fn slot_for(index: usize, current: usize, len: usize) -> SlotPosition {
    SlotPosition::from_offset(relative_offset(index, current, len))
}

#[derive(Clone, Debug)]
pub struct RingCarousel {
    len: usize,
    current: usize,
}

impl RingCarousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step(&mut self, step: Step) {
        if self.len == 0 {
            return;
        }
        self.current = match step {
            Step::Next => (self.current + 1) % self.len,
            Step::Prev => (self.current + self.len - 1) % self.len,
        };
    }

    pub fn slot(&self, index: usize) -> SlotPosition {
        slot_for(index, self.current, self.len)
    }

    /// Slot of every slide, in slide order.
    pub fn layout(&self) -> SmallVec<[SlotPosition; 8]> {
        (0..self.len).map(|i| self.slot(i)).collect()
    }
}

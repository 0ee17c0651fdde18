//! Paginated testimonial carousel state.
//!
//! The carousel shows `cards_per_view` cards at a time and pages through them
//! in whole views. All index arithmetic wraps, so navigation never fails, and
//! a carousel with zero or one page simply stays where it is.

use crate::constants::{FALLBACK_TRACK_GAP_PX, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};
use crate::ring::Step;

/// Viewport width breakpoints used to size a page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints {
    pub mobile_max: f64,
    pub tablet_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: MOBILE_MAX_WIDTH,
            tablet_max: TABLET_MAX_WIDTH,
        }
    }
}

impl Breakpoints {
    /// Number of cards visible at once for a viewport `width` in CSS px.
    pub fn cards_per_view(&self, width: f64) -> usize {
        if width <= self.mobile_max {
            1
        } else if width <= self.tablet_max {
            2
        } else {
            3
        }
    }
}

#[inline]
pub fn cards_per_view(width: f64) -> usize {
    Breakpoints::default().cards_per_view(width)
}

#[inline]
pub fn total_slides(card_count: usize, cards_per_view: usize) -> usize {
    card_count.div_ceil(cards_per_view.max(1))
}

/// Parse a computed CSS `gap` value the way the track layout expects: the
/// leading integer in px, falling back when missing, unparseable or zero.
pub fn parse_gap_px(raw: &str) -> f64 {
    match crate::parse_leading_int(raw) {
        Some(v) if v != 0 => v as f64,
        _ => FALLBACK_TRACK_GAP_PX,
    }
}

#[derive(Clone, Debug)]
pub struct LinearCarousel {
    card_count: usize,
    breakpoints: Breakpoints,
    cards_per_view: usize,
    current: usize,
}

impl LinearCarousel {
    pub fn new(card_count: usize, viewport_width: f64) -> Self {
        Self::with_breakpoints(card_count, viewport_width, Breakpoints::default())
    }

    pub fn with_breakpoints(card_count: usize, viewport_width: f64, breakpoints: Breakpoints) -> Self {
        Self {
            card_count,
            breakpoints,
            cards_per_view: breakpoints.cards_per_view(viewport_width),
            current: 0,
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn cards_per_view(&self) -> usize {
        self.cards_per_view
    }

    pub fn total_slides(&self) -> usize {
        total_slides(self.card_count, self.cards_per_view)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        let total = self.total_slides();
        if total > 0 {
            self.current = (self.current + 1) % total;
        }
    }

    pub fn prev(&mut self) {
        let total = self.total_slides();
        if total > 0 {
            self.current = (self.current + total - 1) % total;
        }
    }

    pub fn step(&mut self, step: Step) {
        match step {
            Step::Next => self.next(),
            Step::Prev => self.prev(),
        }
    }

    /// Jump to `index`, wrapped into range.
    pub fn go_to(&mut self, index: usize) {
        let total = self.total_slides();
        self.current = if total > 0 { index % total } else { 0 };
    }

    /// Re-derive page size for a new viewport width. Returns `true` when the
    /// page size changed, in which case the carousel rewinds to the first page
    /// and the indicators must be rebuilt.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let per_view = self.breakpoints.cards_per_view(viewport_width);
        if per_view == self.cards_per_view {
            return false;
        }
        self.cards_per_view = per_view;
        self.current = 0;
        true
    }

    /// Horizontal track offset in px for the current page (positive; the
    /// track is translated left by this amount).
    pub fn offset_px(&self, card_width: f64, gap: f64) -> f64 {
        self.current as f64 * (card_width + gap) * self.cards_per_view as f64
    }
}

//! Scroll-linked computations: nav state, parallax, anchor targets.

use crate::constants::{NAV_SCROLLED_THRESHOLD_PX, PARALLAX_FACTOR};

#[inline]
pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD_PX
}

/// Vertical geometry of the section hosting a parallax image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Whether any part of the section overlaps the viewport.
    #[inline]
    pub fn in_view(&self, scroll_y: f64, window_height: f64) -> bool {
        scroll_y + window_height > self.top && scroll_y < self.top + self.height
    }
}

/// Parallax translation for the image, or `None` when the section is out of
/// view and the previous offset should stay in place.
pub fn parallax_offset(scroll_y: f64, section: SectionBounds, window_height: f64) -> Option<f64> {
    section
        .in_view(scroll_y, window_height)
        .then(|| (scroll_y - section.top + window_height) * PARALLAX_FACTOR)
}

/// Whether a box spanning `top..bottom` in client coordinates overlaps a
/// viewport of `viewport_height`.
#[inline]
pub fn box_in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

/// Document scroll position that lands an element `header_offset` px below
/// the top edge, given its client-rect top and the current page offset.
#[inline]
pub fn scroll_target_top(element_top: f64, page_y: f64, header_offset: f64) -> f64 {
    element_top + page_y - header_offset
}

/// Coalesces bursts of scroll events into one update per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameThrottle {
    dirty: bool,
}

impl FrameThrottle {
    /// Record that an update is wanted.
    pub fn request(&mut self) {
        self.dirty = true;
    }

    /// Consume the pending request; `true` at most once per request burst.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

//! Platform-independent interaction logic for the Nordic Chess Open site.
//!
//! Nothing in this crate touches the DOM. The web front-end feeds it viewport
//! measurements, pointer coordinates and frame time, and renders whatever
//! indices, slots, offsets and labels come back.

pub mod autoplay;
pub mod carousel;
pub mod constants;
pub mod count_up;
pub mod decor;
pub mod follower;
pub mod form;
pub mod reveal;
pub mod ring;
pub mod scheduler;
pub mod scroll;
pub mod swipe;
pub mod timeline;
pub mod transition;

pub use autoplay::Autoplay;
pub use carousel::{Breakpoints, LinearCarousel};
pub use count_up::CountUp;
pub use follower::PointerFollower;
pub use form::{FormFields, FormStub};
pub use reveal::{ObservePolicy, RevealState};
pub use ring::{RingCarousel, SlotPosition, Step};
pub use scheduler::{Flow, FrameScheduler};
pub use swipe::SwipeTracker;
pub use timeline::Timeline;

/// Leading integer of `raw` after optional whitespace and sign, ignoring any
/// trailing text (`"32px"` → 32, `"1.5rem"` → 1, `"normal"` → none).
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

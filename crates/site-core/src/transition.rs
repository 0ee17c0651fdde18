//! Page transition overlay: intro sequence and outbound link handling.

use crate::constants::{EXIT_NAVIGATE_DELAY, INTRO_ENTER_DELAY, INTRO_SETTLE_DELAY};
use crate::timeline::Timeline;
use std::time::Duration;

/// Class the overlay carries while playing the intro.
pub const ENTERING_CLASS: &str = "entering";
/// Class the overlay carries while covering the page before navigation.
pub const ACTIVE_CLASS: &str = "active";

/// Steps of the intro sequence played once on page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroStep {
    /// Add the entering class.
    Enter,
    /// Drop the entering class, back to the idle overlay.
    Settle,
}

pub fn intro_timeline() -> Timeline<IntroStep> {
    Timeline::new()
        .at(INTRO_ENTER_DELAY, IntroStep::Enter)
        .at(INTRO_SETTLE_DELAY, IntroStep::Settle)
}

/// Modifier keys held during a click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    #[inline]
    pub fn any(self) -> bool {
        self.meta || self.ctrl || self.shift
    }
}

/// What to do with a clicked link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkAction {
    /// Leave the click to the browser.
    PassThrough,
    /// Play the exit transition, then navigate to the href after `delay`.
    Transition { href: String, delay: Duration },
}

/// Decide whether a click on a link with attribute `href` should play the
/// exit transition. `hostname` is the current page's host.
pub fn classify_link(href: &str, hostname: &str, modifiers: Modifiers) -> LinkAction {
    if href.is_empty() || href.starts_with('#') {
        return LinkAction::PassThrough;
    }
    if href.starts_with("http") && !href.contains(hostname) {
        return LinkAction::PassThrough;
    }
    if modifiers.any() {
        return LinkAction::PassThrough;
    }
    if href.ends_with(".html") || href.contains(".html#") {
        LinkAction::Transition {
            href: href.to_owned(),
            delay: EXIT_NAVIGATE_DELAY,
        }
    } else {
        LinkAction::PassThrough
    }
}

//! Visibility-triggered effects and how long their targets stay observed.

use crate::constants::{
    COUNTER_THRESHOLD, HERO_REVEAL_STAGGER, PRELOADER_REMOVE_DELAY, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD,
};
use crate::timeline::Timeline;

/// What happens to an element's observation once its effect has fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObservePolicy {
    /// Keep observing. Later intersections re-run the (idempotent) effect,
    /// which leaves room for a scroll-out behavior without rewiring.
    Persistent,
    /// Stop observing after the first intersection.
    OneShot,
}

impl ObservePolicy {
    #[inline]
    pub fn unobserve_after_trigger(self) -> bool {
        matches!(self, ObservePolicy::OneShot)
    }
}

/// Intersection observer parameters for one effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverConfig {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
    pub policy: ObservePolicy,
}

/// Scroll reveals: 10% visible, 80px short of the viewport bottom.
pub const REVEAL_OBSERVER: ObserverConfig = ObserverConfig {
    threshold: REVEAL_THRESHOLD,
    root_margin: Some(REVEAL_ROOT_MARGIN),
    policy: ObservePolicy::Persistent,
};

/// Counters: half visible, fire once.
pub const COUNTER_OBSERVER: ObserverConfig = ObserverConfig {
    threshold: COUNTER_THRESHOLD,
    root_margin: None,
    policy: ObservePolicy::OneShot,
};

/// Reveal flag of a single element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn from_marker(revealed: bool) -> Self {
        Self { revealed }
    }

    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Mark revealed. Returns `true` only on the first call; the state is
    /// unchanged afterwards.
    pub fn reveal(&mut self) -> bool {
        !std::mem::replace(&mut self.revealed, true)
    }
}

/// Work done once the window has finished loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStep {
    /// Detach the preloader after its fade-out.
    RemovePreloader,
    /// Reveal the n-th hero element.
    RevealHero(usize),
}

/// Preloader removal plus a staggered reveal of `hero_count` hero elements.
pub fn load_sequence(hero_count: usize) -> Timeline<LoadStep> {
    (0..hero_count).fold(
        Timeline::new().at(PRELOADER_REMOVE_DELAY, LoadStep::RemovePreloader),
        |t, i| t.at(HERO_REVEAL_STAGGER * i as u32, LoadStep::RevealHero(i)),
    )
}

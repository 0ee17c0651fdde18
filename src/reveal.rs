use crate::constants::{
    COUNTER_ATTR, COUNTER_SELECTOR, HERO_REVEALS, LOADED, PRELOADER, REVEALED, REVEAL_SELECTOR,
};
use crate::dom::{self, Page};
use crate::error::WireError;
use crate::frame;
use site_core::count_up::parse_count_target;
use site_core::reveal::{load_sequence, LoadStep, COUNTER_OBSERVER, REVEAL_OBSERVER};
use site_core::{CountUp, Flow, RevealState};
use web_sys as web;

/// Reveal-on-scroll. Elements keep being observed once revealed.
pub fn wire_reveals(page: &Page) -> Result<(), WireError> {
    let targets = page.query_all(REVEAL_SELECTOR);
    if targets.is_empty() {
        return Err(WireError::MissingElement(REVEAL_SELECTOR));
    }
    log::debug!("[reveal] observing {} elements", targets.len());
    dom::observe_intersections(REVEAL_OBSERVER, &targets, reveal)?;
    Ok(())
}

fn reveal(el: &web::Element) {
    let classes = el.class_list();
    let mut state = RevealState::from_marker(classes.contains(REVEALED));
    if state.reveal() {
        _ = classes.add_1(REVEALED);
    }
}

/// Count `[data-count]` elements up from zero the first time they are half
/// on screen.
pub fn wire_counters(page: &Page) -> Result<(), WireError> {
    let targets: Vec<web::Element> = page
        .query_all(COUNTER_SELECTOR)
        .into_iter()
        .filter(|el| {
            let parsed = el
                .get_attribute(COUNTER_ATTR)
                .as_deref()
                .and_then(parse_count_target);
            if parsed.is_none() {
                log::warn!("[counter] skipping unparseable {}", COUNTER_ATTR);
            }
            parsed.is_some()
        })
        .collect();
    if targets.is_empty() {
        return Err(WireError::MissingElement(COUNTER_SELECTOR));
    }

    let scheduler = page.scheduler.clone();
    dom::observe_intersections(COUNTER_OBSERVER, &targets, move |el| {
        let Some(target) = el
            .get_attribute(COUNTER_ATTR)
            .as_deref()
            .and_then(parse_count_target)
        else {
            return;
        };
        let el = el.clone();
        let mut counter = CountUp::new(target);
        frame::register(&scheduler, "count-up", move |dt| {
            if let Some(value) = counter.advance(dt) {
                el.set_text_content(Some(&value.to_string()));
            }
            if counter.is_finished() {
                Flow::Done
            } else {
                Flow::Continue
            }
        });
    })?;
    Ok(())
}

/// Once the window has loaded: fade out and detach the preloader, then reveal
/// the hero elements one after another.
pub fn wire_load_sequence(page: &Page) -> Result<(), WireError> {
    let page_handle = page.clone();
    if page.document.ready_state() == "complete" {
        return run_load_sequence(&page_handle);
    }
    dom::on(page.window.as_ref(), "load", move |_: web::Event| {
        if let Err(e) = run_load_sequence(&page_handle) {
            log::warn!("[load] {}", e);
        }
    })
}

fn run_load_sequence(page: &Page) -> Result<(), WireError> {
    let preloader = page.query(PRELOADER).ok();
    if let Some(p) = &preloader {
        _ = p.class_list().add_1(LOADED);
    }
    let heroes = page.query_all(HERO_REVEALS);
    dom::play_timeline(load_sequence(heroes.len()), move |step| match step {
        LoadStep::RemovePreloader => {
            if let Some(p) = &preloader {
                p.remove();
            }
        }
        LoadStep::RevealHero(i) => {
            if let Some(el) = heroes.get(i) {
                _ = el.class_list().add_1(REVEALED);
            }
        }
    })
}

use crate::carousel::wire_autoplay;
use crate::constants::{
    POSITION_ATTR, VENUE_CAROUSEL_ID, VENUE_NEXT_ID, VENUE_PREV_ID, VENUE_SLIDE,
};
use crate::dom::{self, Page};
use crate::error::WireError;
use crate::events;
use site_core::{RingCarousel, Step};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct VenueTour {
    slides: Vec<web::Element>,
    ring: RingCarousel,
}

impl VenueTour {
    fn render(&self) {
        for (slide, slot) in self.slides.iter().zip(self.ring.layout()) {
            _ = slide.set_attribute(POSITION_ATTR, slot.as_str());
        }
    }

    fn step(&mut self, step: Step) {
        self.ring.step(step);
        self.render();
    }
}

/// Venue tour: slides arranged on a ring around the centered one.
pub fn wire(page: &Page) -> Result<(), WireError> {
    let carousel = page.element(VENUE_CAROUSEL_ID)?;
    let prev = page.element(VENUE_PREV_ID)?;
    let next = page.element(VENUE_NEXT_ID)?;

    let slides = dom::query_all_in(&carousel, VENUE_SLIDE);
    let tour = VenueTour {
        ring: RingCarousel::new(slides.len()),
        slides: slides.clone(),
    };
    tour.render();
    let state = Rc::new(RefCell::new(tour));

    for (button, step) in [(prev, Step::Prev), (next, Step::Next)] {
        let s = state.clone();
        dom::on(button.as_ref(), "click", move |_: web::Event| {
            s.borrow_mut().step(step)
        })?;
    }

    // Side slides step toward themselves; the center and hidden ones do nothing.
    for (i, slide) in slides.iter().enumerate() {
        let s = state.clone();
        dom::on(slide.as_ref(), "click", move |_: web::Event| {
            let mut tour = s.borrow_mut();
            if let Some(step) = tour.ring.slot(i).click_step() {
                tour.step(step);
            }
        })?;
    }

    let s = state.clone();
    events::wire_arrow_keys(&page.window, &carousel, move |step| {
        s.borrow_mut().step(step)
    })?;

    let s = state.clone();
    events::wire_swipe(carousel.as_ref(), move |step| s.borrow_mut().step(step))?;

    wire_autoplay(page, "venue-autoplay", carousel.as_ref(), move || {
        state.borrow_mut().step(Step::Next)
    })
}

use crate::constants::{
    ACTIVE, CAROUSEL_DOTS_ID, CAROUSEL_DOT, TESTIMONIAL_CARD, TESTIMONIAL_NEXT_ID,
    TESTIMONIAL_PREV_ID, TESTIMONIAL_TRACK_ID,
};
use crate::dom::{self, Page};
use crate::error::WireError;
use crate::events;
use crate::frame;
use site_core::carousel::parse_gap_px;
use site_core::constants::FALLBACK_TRACK_GAP_PX;
use site_core::{Autoplay, Flow, LinearCarousel, Step};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Testimonials {
    window: web::Window,
    track: web::HtmlElement,
    cards: Vec<web::Element>,
    dots_host: web::HtmlElement,
    dots: Vec<web::Element>,
    // Dropped with their dots on rebuild.
    dot_listeners: Vec<Closure<dyn FnMut(web::Event)>>,
    carousel: LinearCarousel,
}

type Shared = Rc<RefCell<Testimonials>>;

impl Testimonials {
    fn card_width(&self) -> f64 {
        self.cards
            .first()
            .and_then(|c| c.dyn_ref::<web::HtmlElement>())
            .map(|c| c.offset_width() as f64)
            .unwrap_or(0.0)
    }

    fn track_gap(&self) -> f64 {
        self.window
            .get_computed_style(&self.track)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("gap").ok())
            .map(|raw| parse_gap_px(&raw))
            .unwrap_or(FALLBACK_TRACK_GAP_PX)
    }

    fn render(&self) {
        let offset = self.carousel.offset_px(self.card_width(), self.track_gap());
        _ = self
            .track
            .style()
            .set_property("transform", &format!("translateX(-{}px)", offset));
        let current = self.carousel.current();
        for (i, dot) in self.dots.iter().enumerate() {
            _ = dot.class_list().toggle_with_force(ACTIVE, i == current);
        }
    }

    fn step(&mut self, step: Step) {
        self.carousel.step(step);
        self.render();
    }
}

fn rebuild_dots(state: &Shared, document: &web::Document) -> Result<(), WireError> {
    let mut s = state.borrow_mut();
    s.dots_host.set_inner_html("");
    s.dots.clear();
    s.dot_listeners.clear();
    for i in 0..s.carousel.total_slides() {
        let dot = document.create_element("span")?;
        dot.class_list().add_1(CAROUSEL_DOT)?;
        let weak = Rc::downgrade(state);
        let listener = dom::listen(dot.as_ref(), "click", move |_: web::Event| {
            if let Some(state) = weak.upgrade() {
                let mut s = state.borrow_mut();
                s.carousel.go_to(i);
                s.render();
            }
        })?;
        s.dots_host.append_child(&dot)?;
        s.dots.push(dot);
        s.dot_listeners.push(listener);
    }
    Ok(())
}

/// Testimonial carousel: paged track with dots, arrows, swipe and autoplay.
pub fn wire(page: &Page) -> Result<(), WireError> {
    let track = page.element(TESTIMONIAL_TRACK_ID)?;
    let prev = page.element(TESTIMONIAL_PREV_ID)?;
    let next = page.element(TESTIMONIAL_NEXT_ID)?;
    let dots_host = page.element(CAROUSEL_DOTS_ID)?;

    let cards = dom::query_all_in(&track, TESTIMONIAL_CARD);
    let carousel = LinearCarousel::new(cards.len(), dom::viewport_width(&page.window));
    log::debug!(
        "[testimonials] {} cards, {} per view",
        cards.len(),
        carousel.cards_per_view()
    );
    let state: Shared = Rc::new(RefCell::new(Testimonials {
        window: page.window.clone(),
        track: track.clone(),
        cards,
        dots_host,
        dots: Vec::new(),
        dot_listeners: Vec::new(),
        carousel,
    }));
    rebuild_dots(&state, &page.document)?;
    state.borrow().render();

    for (button, step) in [(prev, Step::Prev), (next, Step::Next)] {
        let s = state.clone();
        dom::on(button.as_ref(), "click", move |_: web::Event| {
            s.borrow_mut().step(step)
        })?;
    }

    let s = state.clone();
    let page_handle = page.clone();
    dom::on(page.window.as_ref(), "resize", move |_: web::Event| {
        let width = dom::viewport_width(&page_handle.window);
        if !s.borrow_mut().carousel.resize(width) {
            return;
        }
        if let Err(e) = rebuild_dots(&s, &page_handle.document) {
            log::warn!("[testimonials] dot rebuild failed: {}", e);
        }
        s.borrow().render();
    })?;

    let s = state.clone();
    events::wire_swipe(track.as_ref(), move |step| s.borrow_mut().step(step))?;

    wire_autoplay(page, "testimonials-autoplay", track.as_ref(), move || {
        state.borrow_mut().step(Step::Next)
    })
}

/// Advance on a fixed period, paused while the pointer is over `hover_target`.
/// Leaving restarts the period from zero.
pub(crate) fn wire_autoplay(
    page: &Page,
    name: &'static str,
    hover_target: &web::EventTarget,
    mut advance: impl FnMut() + 'static,
) -> Result<(), WireError> {
    let clock = Rc::new(RefCell::new(Autoplay::default()));

    let enter = clock.clone();
    let leave = clock.clone();
    events::wire_hover(
        hover_target,
        move || enter.borrow_mut().pause(),
        move || leave.borrow_mut().resume(),
    )?;

    frame::register(&page.scheduler, name, move |dt| {
        if clock.borrow_mut().tick(dt) {
            advance();
        }
        Flow::Continue
    });
    Ok(())
}

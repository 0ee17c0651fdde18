use crate::dom;
use crate::error::WireError;
use site_core::{Step, SwipeTracker};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Horizontal swipe navigation on `target`. Touch listeners are passive, so
/// scrolling is never blocked.
pub fn wire_swipe(
    target: &web::EventTarget,
    on_step: impl Fn(Step) + 'static,
) -> Result<(), WireError> {
    let tracker = Rc::new(RefCell::new(SwipeTracker::default()));

    let start = tracker.clone();
    dom::on_passive(target, "touchstart", move |ev: web::TouchEvent| {
        if let Some(x) = changed_touch_x(&ev) {
            start.borrow_mut().begin(x);
        }
    })?;

    dom::on_passive(target, "touchend", move |ev: web::TouchEvent| {
        let step = changed_touch_x(&ev).and_then(|x| tracker.borrow_mut().end(x));
        if let Some(step) = step {
            log::debug!("[swipe] {:?}", step);
            on_step(step);
        }
    })
}

#[inline]
fn changed_touch_x(ev: &web::TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|t| t.screen_x() as f64)
}

/// `mouseenter` / `mouseleave` pair on one element.
pub fn wire_hover(
    target: &web::EventTarget,
    mut on_enter: impl FnMut() + 'static,
    mut on_leave: impl FnMut() + 'static,
) -> Result<(), WireError> {
    dom::on(target, "mouseenter", move |_: web::Event| on_enter())?;
    dom::on(target, "mouseleave", move |_: web::Event| on_leave())
}

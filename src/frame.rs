use crate::dom::{self, Page};
use crate::error::WireError;
use instant::Instant;
use site_core::scheduler::ConsumerId;
use site_core::scroll::FrameThrottle;
use site_core::{Flow, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedScheduler = Rc<RefCell<FrameScheduler>>;

/// Register a per-frame consumer. Consumers must not call this from inside a
/// frame; such a registration is dropped with a warning.
pub fn register(
    scheduler: &SharedScheduler,
    name: &'static str,
    consumer: impl FnMut(Duration) -> Flow + 'static,
) -> Option<ConsumerId> {
    match scheduler.try_borrow_mut() {
        Ok(mut s) => Some(s.register(name, consumer)),
        Err(_) => {
            log::warn!("[frame] {} registered mid-frame; ignored", name);
            None
        }
    }
}

/// Run `apply` on the first frame after any burst of scroll events.
pub fn throttled_scroll(
    page: &Page,
    name: &'static str,
    mut apply: impl FnMut() + 'static,
) -> Result<(), WireError> {
    let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
    let on_scroll = throttle.clone();
    dom::on(page.window.as_ref(), "scroll", move |_: web::Event| {
        on_scroll.borrow_mut().request();
    })?;
    register(&page.scheduler, name, move |_| {
        if throttle.borrow_mut().take() {
            apply();
        }
        Flow::Continue
    });
    Ok(())
}

pub fn start_loop(scheduler: SharedScheduler) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mut last = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt = now - last;
        last = now;
        scheduler.borrow_mut().tick(dt);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

#![cfg(target_arch = "wasm32")]
use crate::dom::Page;
use crate::error::WireError;
use site_core::FrameScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod constants;
mod cursor;
mod decor;
mod dom;
mod error;
mod events;
mod forms;
mod frame;
mod menu;
mod nav;
mod parallax;
mod reveal;
mod sound;
mod transition;
mod venue;

type Wiring = fn(&Page) -> Result<(), WireError>;

// Startup order. Each component attaches on its own; a missing element only
// disables that one.
const COMPONENTS: [(&str, Wiring); 18] = [
    ("page-transition", transition::wire),
    ("cursor", cursor::wire),
    ("nav-scroll", nav::wire_scroll_state),
    ("mobile-menu", menu::wire),
    ("reveal", reveal::wire_reveals),
    ("parallax", parallax::wire),
    ("counters", reveal::wire_counters),
    ("testimonials", carousel::wire),
    ("form-labels", forms::wire_label_placeholders),
    ("anchor-scroll", nav::wire_anchor_scroll),
    ("sound-toggle", sound::wire),
    ("hero-form", forms::wire_hero),
    ("discover-more", nav::wire_discover),
    ("particles", decor::wire_particles),
    ("data-stream", decor::wire_data_stream),
    ("venue-tour", venue::wire),
    ("contact-form", forms::wire_contact),
    ("load-sequence", reveal::wire_load_sequence),
];

fn report(name: &str, result: Result<(), WireError>) {
    match result {
        Ok(()) => log::debug!("[init] {} ready", name),
        Err(WireError::MissingElement(what)) => {
            log::debug!("[init] {} inactive: no {}", name, what)
        }
        Err(e) => log::warn!("[init] {} failed: {}", name, e),
    }
}

fn wire_all(page: &Page) {
    for (name, wire) in COMPONENTS {
        report(name, wire(page));
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await?;

    let scheduler = Rc::new(RefCell::new(FrameScheduler::new()));
    let page = Page {
        window,
        document,
        scheduler: scheduler.clone(),
    };
    wire_all(&page);
    log::info!(
        "[init] {} frame consumers registered",
        scheduler.borrow().len()
    );
    frame::start_loop(scheduler);
    Ok(())
}

use crate::constants::PAGE_TRANSITION_ID;
use crate::dom::{self, Page};
use crate::error::WireError;
use site_core::transition::{
    classify_link, intro_timeline, IntroStep, LinkAction, Modifiers, ACTIVE_CLASS, ENTERING_CLASS,
};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(page: &Page) -> Result<(), WireError> {
    let overlay = page.element(PAGE_TRANSITION_ID)?;
    play_intro(&overlay)?;
    wire_link_clicks(page, overlay)
}

fn play_intro(overlay: &web::HtmlElement) -> Result<(), WireError> {
    let overlay = overlay.clone();
    dom::play_timeline(intro_timeline(), move |step| {
        let classes = overlay.class_list();
        _ = match step {
            IntroStep::Enter => classes.add_1(ENTERING_CLASS),
            IntroStep::Settle => classes.remove_1(ENTERING_CLASS),
        };
    })
}

fn wire_link_clicks(page: &Page, overlay: web::HtmlElement) -> Result<(), WireError> {
    let window = page.window.clone();
    dom::on(page.document.as_ref(), "click", move |ev: web::MouseEvent| {
        let Some(link) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("a").ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let hostname = window.location().hostname().unwrap_or_default();
        let modifiers = Modifiers {
            meta: ev.meta_key(),
            ctrl: ev.ctrl_key(),
            shift: ev.shift_key(),
        };
        let LinkAction::Transition { href, delay } = classify_link(&href, &hostname, modifiers)
        else {
            return;
        };
        ev.prevent_default();
        _ = overlay.class_list().add_1(ACTIVE_CLASS);
        log::info!("[transition] leaving for {}", href);
        let location = window.location();
        if let Err(e) = dom::set_timeout(delay, move || {
            _ = location.set_href(&href);
        }) {
            log::warn!("[transition] navigation timer failed: {}", e);
        }
    })
}

use crate::constants::{HERO_VIDEO, MUTED, SOUND_TOGGLE_ID};
use crate::dom::{self, Page};
use crate::error::WireError;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hero video sound toggle. Starts muted; the video follows the control.
pub fn wire(page: &Page) -> Result<(), WireError> {
    let toggle = page.element(SOUND_TOGGLE_ID)?;
    _ = toggle.class_list().add_1(MUTED);
    let video = page
        .query(HERO_VIDEO)
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok());

    let control = toggle.clone();
    dom::on(toggle.as_ref(), "click", move |_: web::Event| {
        let muted = control.class_list().toggle(MUTED).unwrap_or(true);
        if let Some(video) = &video {
            video.set_muted(muted);
        }
    })
}

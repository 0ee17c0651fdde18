use site_core::scroll::box_in_viewport;
use site_core::Step;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn arrow_step(key: &str) -> Option<Step> {
    match key {
        "ArrowLeft" => Some(Step::Prev),
        "ArrowRight" => Some(Step::Next),
        _ => None,
    }
}

/// Whether any part of `region` is inside the current viewport.
pub fn region_visible(window: &web::Window, region: &web::Element) -> bool {
    let rect = region.get_bounding_client_rect();
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    box_in_viewport(rect.top(), rect.bottom(), viewport_height)
}

/// Arrow keys anywhere on the page step `region`'s carousel while the region
/// is on screen.
pub fn wire_arrow_keys(
    window: &web::Window,
    region: &web::Element,
    on_step: impl Fn(Step) + 'static,
) -> Result<(), JsValue> {
    let win = window.clone();
    let region = region.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let Some(step) = arrow_step(&ev.key()) else {
            return;
        };
        if region_visible(&win, &region) {
            on_step(step);
        }
    }) as Box<dyn FnMut(_)>);
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

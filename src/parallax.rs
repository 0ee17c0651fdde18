use crate::constants::{PARALLAX_IMAGE, PARALLAX_SECTION};
use crate::dom::{self, Page};
use crate::error::WireError;
use crate::frame;
use site_core::scroll::{parallax_offset, SectionBounds};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(page: &Page) -> Result<(), WireError> {
    let image = page.query(PARALLAX_IMAGE)?;
    let window = page.window.clone();
    frame::throttled_scroll(page, "parallax", move || {
        let Some(section) = image
            .closest(PARALLAX_SECTION)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            return;
        };
        let bounds = SectionBounds {
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        };
        let offset = parallax_offset(
            dom::scroll_y(&window),
            bounds,
            dom::viewport_height(&window),
        );
        if let Some(y) = offset {
            _ = image
                .style()
                .set_property("transform", &format!("translateY({}px)", y));
        }
    })
}

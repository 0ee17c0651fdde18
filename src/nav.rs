use crate::constants::{ANCHOR_LINKS, HERO_DISCOVER, HERO_NEXT_SECTION, NAV_ID, SCROLLED};
use crate::dom::{self, Page};
use crate::error::WireError;
use crate::frame;
use site_core::constants::{ANCHOR_HEADER_OFFSET_PX, DISCOVER_HEADER_OFFSET_PX};
use site_core::scroll::{nav_is_scrolled, scroll_target_top};
use web_sys as web;

/// `scrolled` on the nav bar once the page is past the hero fold.
pub fn wire_scroll_state(page: &Page) -> Result<(), WireError> {
    let nav = page.element(NAV_ID)?;
    let window = page.window.clone();
    let apply = move || {
        let classes = nav.class_list();
        _ = if nav_is_scrolled(dom::scroll_y(&window)) {
            classes.add_1(SCROLLED)
        } else {
            classes.remove_1(SCROLLED)
        };
    };
    apply();
    frame::throttled_scroll(page, "nav-scroll", apply)
}

/// Smooth-scroll in-page anchors, leaving room for the fixed header.
pub fn wire_anchor_scroll(page: &Page) -> Result<(), WireError> {
    for link in page.query_all(ANCHOR_LINKS) {
        let page_handle = page.clone();
        let anchor = link.clone();
        dom::on(link.as_ref(), "click", move |ev: web::Event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            // Not every fragment is a valid selector; those fall through.
            let Ok(Some(target)) = page_handle.document.query_selector(&href) else {
                return;
            };
            ev.prevent_default();
            scroll_to_element(&page_handle.window, &target, ANCHOR_HEADER_OFFSET_PX);
        })?;
    }
    Ok(())
}

/// Hero "discover more" control scrolls to the first section after the hero.
pub fn wire_discover(page: &Page) -> Result<(), WireError> {
    let control = page.query(HERO_DISCOVER)?;
    let page_handle = page.clone();
    dom::on(control.as_ref(), "click", move |_: web::Event| {
        if let Ok(Some(section)) = page_handle.document.query_selector(HERO_NEXT_SECTION) {
            scroll_to_element(&page_handle.window, &section, DISCOVER_HEADER_OFFSET_PX);
        }
    })
}

fn scroll_to_element(window: &web::Window, target: &web::Element, header_offset: f64) {
    let top = scroll_target_top(
        target.get_bounding_client_rect().top(),
        dom::scroll_y(window),
        header_offset,
    );
    dom::smooth_scroll_to(window, top);
}

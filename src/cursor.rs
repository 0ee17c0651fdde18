use crate::constants::{
    CURSOR_DOT, CURSOR_HOVER, CURSOR_OUTLINE, FINE_POINTER_QUERY, INTERACTIVE_SELECTOR,
};
use crate::dom::{self, Page};
use crate::error::WireError;
use crate::events;
use crate::frame;
use site_core::{Flow, PointerFollower};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Custom cursor: the dot tracks the pointer exactly, the outline eases after
/// it once per frame. Fine-pointer devices only.
pub fn wire(page: &Page) -> Result<(), WireError> {
    let dot = page.query(CURSOR_DOT)?;
    let outline = page.query(CURSOR_OUTLINE)?;
    if !dom::media_matches(&page.window, FINE_POINTER_QUERY) {
        log::debug!("[cursor] coarse pointer; custom cursor off");
        return Ok(());
    }

    let follower = Rc::new(RefCell::new(PointerFollower::default()));

    let on_move = follower.clone();
    dom::on(page.document.as_ref(), "mousemove", move |ev: web::MouseEvent| {
        let (x, y) = (ev.client_x(), ev.client_y());
        on_move.borrow_mut().set_target(x as f32, y as f32);
        dom::set_style(&dot, "left", &dom::px(x));
        dom::set_style(&dot, "top", &dom::px(y));
    })?;

    frame::register(&page.scheduler, "cursor", move |_| {
        let trail = follower.borrow_mut().step();
        dom::set_style(&outline, "left", &dom::px(trail.x));
        dom::set_style(&outline, "top", &dom::px(trail.y));
        Flow::Continue
    });

    wire_hover_state(page)
}

fn wire_hover_state(page: &Page) -> Result<(), WireError> {
    let body = page.body()?;
    for el in page.query_all(INTERACTIVE_SELECTOR) {
        let enter = body.clone();
        let leave = body.clone();
        events::wire_hover(
            el.as_ref(),
            move || {
                _ = enter.class_list().add_1(CURSOR_HOVER);
            },
            move || {
                _ = leave.class_list().remove_1(CURSOR_HOVER);
            },
        )?;
    }
    Ok(())
}

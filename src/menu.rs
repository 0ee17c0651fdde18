use crate::constants::{ACTIVE, MOBILE_MENU_ID, NAV_TOGGLE_ID};
use crate::dom::{self, Page};
use crate::error::WireError;
use web_sys as web;

#[derive(Clone)]
struct MobileMenu {
    button: web::HtmlElement,
    panel: web::HtmlElement,
    body: web::HtmlElement,
}

impl MobileMenu {
    fn is_open(&self) -> bool {
        self.panel.class_list().contains(ACTIVE)
    }

    fn toggle(&self) {
        _ = self.button.class_list().toggle(ACTIVE);
        _ = self.panel.class_list().toggle(ACTIVE);
        self.lock_scroll(self.is_open());
    }

    fn close(&self) {
        _ = self.button.class_list().remove_1(ACTIVE);
        _ = self.panel.class_list().remove_1(ACTIVE);
        self.lock_scroll(false);
    }

    // Page behind an open menu must not scroll.
    fn lock_scroll(&self, locked: bool) {
        let value = if locked { "hidden" } else { "" };
        _ = self.body.style().set_property("overflow", value);
    }
}

pub fn wire(page: &Page) -> Result<(), WireError> {
    let menu = MobileMenu {
        button: page.element(NAV_TOGGLE_ID)?,
        panel: page.element(MOBILE_MENU_ID)?,
        body: page.body()?,
    };

    let m = menu.clone();
    dom::on(menu.button.as_ref(), "click", move |_: web::Event| m.toggle())?;

    for link in dom::query_all_in(&menu.panel, "a") {
        let m = menu.clone();
        dom::on(link.as_ref(), "click", move |_: web::Event| m.close())?;
    }
    Ok(())
}

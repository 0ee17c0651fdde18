use crate::constants::{CONTACT_FORM_ID, FLOATING_LABEL_FIELDS, HERO_FORM_ID};
use crate::dom::{self, Page};
use crate::error::WireError;
use site_core::form::{Feedback, LabelMarkup, CONTACT_FORM, HERO_FORM};
use site_core::{FormFields, FormStub};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_hero(page: &Page) -> Result<(), WireError> {
    wire_stub(page, HERO_FORM_ID, HERO_FORM)
}

pub fn wire_contact(page: &Page) -> Result<(), WireError> {
    wire_stub(page, CONTACT_FORM_ID, CONTACT_FORM)
}

/// Floating labels key off `:placeholder-shown`, which needs a placeholder.
pub fn wire_label_placeholders(page: &Page) -> Result<(), WireError> {
    for field in page.query_all(FLOATING_LABEL_FIELDS) {
        let missing = field
            .get_attribute("placeholder")
            .map_or(true, |p| p.is_empty());
        if missing {
            field.set_attribute("placeholder", " ")?;
        }
    }
    Ok(())
}

/// Submissions stay local: the fields are logged and the submit control shows
/// a confirmation for a while.
fn wire_stub(page: &Page, id: &'static str, stub: FormStub) -> Result<(), WireError> {
    let form: web::HtmlFormElement = page.element_as(id)?;
    let target = form.clone();
    dom::on(form.as_ref(), "submit", move |ev: web::Event| {
        ev.prevent_default();
        match collect_fields(&target) {
            Ok(fields) => log::info!("[form] {} submitted: {}", stub.name, fields),
            Err(e) => log::warn!("[form] {} fields unreadable: {}", stub.name, e),
        }
        if let Err(e) = confirm(&target, stub) {
            log::warn!("[form] {} feedback failed: {}", stub.name, e);
        }
    })
}

fn collect_fields(form: &web::HtmlFormElement) -> Result<FormFields, WireError> {
    let data = web::FormData::new_with_form(form)?;
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(FormFields::default());
    };
    let mut fields = FormFields::default();
    for entry in entries {
        let pair = js_sys::Array::from(&entry?);
        let Some(name) = pair.get(0).as_string() else {
            continue;
        };
        // Files and other non-text values are recorded empty.
        fields.insert(name, pair.get(1).as_string().unwrap_or_default());
    }
    Ok(fields)
}

fn confirm(form: &web::HtmlFormElement, stub: FormStub) -> Result<(), WireError> {
    let control = form
        .query_selector(stub.submit_selector)?
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or(WireError::MissingElement(stub.submit_selector))?;
    let original = read_label(&control, stub.markup);
    let form = form.clone();
    dom::play_timeline(stub.feedback(original), move |step| match step {
        Feedback::Confirm { label } => {
            write_label(&control, stub.markup, label);
            dom::set_disabled(&control, true);
            if let Some(accent) = stub.accent {
                _ = control.style().set_property("background-color", accent);
            }
        }
        Feedback::Restore { label } => {
            write_label(&control, stub.markup, &label);
            dom::set_disabled(&control, false);
            if stub.accent.is_some() {
                _ = control.style().remove_property("background-color");
            }
            form.reset();
        }
    })
}

fn read_label(control: &web::HtmlElement, markup: LabelMarkup) -> String {
    match markup {
        LabelMarkup::Text => control.text_content().unwrap_or_default(),
        LabelMarkup::Html => control.inner_html(),
    }
}

fn write_label(control: &web::HtmlElement, markup: LabelMarkup, label: &str) {
    match markup {
        LabelMarkup::Text => control.set_text_content(Some(label)),
        LabelMarkup::Html => control.set_inner_html(label),
    }
}

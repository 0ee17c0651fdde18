use crate::error::WireError;
use crate::frame::SharedScheduler;
use site_core::reveal::ObserverConfig;
use site_core::Timeline;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Handles every component needs while wiring itself to the page.
#[derive(Clone)]
pub struct Page {
    pub window: web::Window,
    pub document: web::Document,
    pub scheduler: SharedScheduler,
}

impl Page {
    pub fn element(&self, id: &'static str) -> Result<web::HtmlElement, WireError> {
        self.element_as(id)
    }

    pub fn element_as<T: JsCast>(&self, id: &'static str) -> Result<T, WireError> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<T>().ok())
            .ok_or(WireError::MissingElement(id))
    }

    pub fn query(&self, selector: &'static str) -> Result<web::HtmlElement, WireError> {
        self.document
            .query_selector(selector)?
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .ok_or(WireError::MissingElement(selector))
    }

    pub fn query_all(&self, selector: &str) -> Vec<web::Element> {
        self.document
            .query_selector_all(selector)
            .map(node_list_elements)
            .unwrap_or_default()
    }

    pub fn body(&self) -> Result<web::HtmlElement, WireError> {
        self.document.body().ok_or(WireError::MissingElement("body"))
    }
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(node_list_elements)
        .unwrap_or_default()
}

fn node_list_elements(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Attach `handler` and hand back the closure. The listener stays registered,
/// so the closure must outlive every event the target can still fire.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<Closure<dyn FnMut(E)>, WireError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    Ok(closure)
}

/// Attach `handler` for the lifetime of the page.
pub fn on<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), WireError>
where
    E: FromWasmAbi + 'static,
{
    listen(target, event, handler)?.forget();
    Ok(())
}

/// Like [`on`], registered as a passive listener (touch handlers).
pub fn on_passive<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), WireError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    )?;
    closure.forget();
    Ok(())
}

pub fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) -> Result<i32, WireError> {
    let window = web::window().ok_or(WireError::MissingElement("window"))?;
    let callback = Closure::once_into_js(f);
    let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay.as_millis().min(i32::MAX as u128) as i32,
    )?;
    Ok(handle)
}

/// Dispatch each timeline entry with a one-shot timer. Entries at offset zero
/// run synchronously, before this returns.
pub fn play_timeline<E: 'static>(
    timeline: Timeline<E>,
    handler: impl Fn(E) + 'static,
) -> Result<(), WireError> {
    let handler = Rc::new(handler);
    for (offset, event) in timeline.into_entries() {
        if offset.is_zero() {
            handler(event);
            continue;
        }
        let h = handler.clone();
        set_timeout(offset, move || h(event))?;
    }
    Ok(())
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn px(v: impl std::fmt::Display) -> String {
    format!("{}px", v)
}

pub fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

pub fn smooth_scroll_to(window: &web::Window, top: f64) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

pub fn set_disabled(el: &web::Element, disabled: bool) {
    if let Some(button) = el.dyn_ref::<web::HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        _ = el.set_attribute("disabled", "");
    } else {
        _ = el.remove_attribute("disabled");
    }
}

/// Observe `targets` and call `on_enter` for each one that starts
/// intersecting. The config's policy decides whether the element keeps being
/// watched afterwards.
pub fn observe_intersections(
    config: ObserverConfig,
    targets: &[web::Element],
    mut on_enter: impl FnMut(&web::Element) + 'static,
) -> Result<web::IntersectionObserver, WireError> {
    let policy = config.policy;
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_enter(&target);
                if policy.unobserve_after_trigger() {
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    if let Some(margin) = config.root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}

/// Resolves once the document has been parsed.
pub async fn dom_ready(document: &web::Document) -> Result<(), WireError> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}

//! Thin helpers over `web_sys`.
//!
//! Style and class writes are best-effort: a failure is logged at debug
//! and otherwise ignored, since there is nothing useful to do about it.

use motion::theme::ThemeStore;
use motion::{Point, Rect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent, Window};

use crate::registry::Probe;

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?.document().ok_or_else(|| JsValue::from_str("no document"))
}

/// Every element under `scope` matching `selector`, in document order.
pub fn query_all(scope: &Element, selector: &str) -> Vec<Element> {
    scope.query_selector_all(selector).map_or_else(|_| Vec::new(), |list| elements(&list))
}

pub fn query_document(document: &Document, selector: &str) -> Vec<Element> {
    document.query_selector_all(selector).map_or_else(|_| Vec::new(), |list| elements(&list))
}

fn elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length()).filter_map(|i| list.item(i)).filter_map(|node| node.dyn_into::<Element>().ok()).collect()
}

pub fn html(element: Element) -> Result<HtmlElement, JsValue> {
    element.dyn_into::<HtmlElement>().map_err(|_| JsValue::from_str("element is not an HtmlElement"))
}

pub fn rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn pointer(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

pub fn set_style(element: &HtmlElement, name: &str, value: &str) {
    if let Err(err) = element.style().set_property(name, value) {
        log::debug!("style {name}: {err:?}");
    }
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(err) = result {
        log::debug!("class {class}: {err:?}");
    }
}

/// Attach `handler` for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// [`listen`] for mouse events; anything else is ignored.
pub fn listen_mouse(
    target: &EventTarget,
    event: &str,
    mut handler: impl FnMut(&MouseEvent) + 'static,
) -> Result<(), JsValue> {
    listen(target, event, move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            handler(mouse);
        }
    })
}

/// Current vertical scroll offset and viewport height, px.
pub fn viewport(window: &Window) -> (f64, f64) {
    let offset = window.scroll_y().unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    (offset, height)
}

/// Scrollable height of the whole document, px.
pub fn document_height(document: &Document) -> f64 {
    document.document_element().map_or(0.0, |root| f64::from(root.scroll_height()))
}

/// Document-backed [`Probe`] for the feature registry.
pub struct DocumentProbe(pub Document);

impl Probe for DocumentProbe {
    type Node = Element;

    fn query(&self, selector: &str) -> Vec<Element> {
        query_document(&self.0, selector)
    }
}

/// `localStorage`-backed theme preference. Storage may be unavailable
/// (private browsing, disabled cookies); reads then find nothing and
/// writes are dropped with a log line.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl ThemeStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn save(&mut self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("theme not persisted: {err:?}");
        }
    }
}

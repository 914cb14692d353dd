//! Scroll progress bar and back-to-top button.
//!
//! Both elements are created here; the page markup does not carry them.

use std::rc::Rc;

use motion::scroll::ScrollMetrics;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::runtime::Runtime;

pub const ROOT: &str = "body";
const VISIBLE_CLASS: &str = "visible";

pub fn setup(runtime: &Rc<Runtime>, roots: Vec<Element>) -> Result<(), JsValue> {
    let Some(body) = roots.into_iter().next() else {
        return Ok(());
    };
    let document = runtime.document();

    let track = create(document, "div", "scroll-progress-container")?;
    let bar = create(document, "div", "scroll-progress-bar")?;
    track.append_child(&bar)?;
    body.append_child(&track)?;

    let button = create(document, "button", "back-to-top")?;
    button.set_inner_html(r#"<i class="fas fa-arrow-up"></i>"#);
    button.set_attribute("aria-label", "Back to Top")?;
    body.append_child(&button)?;

    let rt = Rc::clone(runtime);
    dom::listen(&button, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        rt.window().scroll_to_with_scroll_to_options(&options);
    })?;

    super::on_scroll(runtime, move |rt| {
        let (offset, viewport_height) = dom::viewport(rt.window());
        let metrics = ScrollMetrics::new(offset, dom::document_height(rt.document()), viewport_height);
        dom::set_style(&bar, "width", &format!("{}%", metrics.progress_percent()));
        dom::set_class(&button, VISIBLE_CLASS, metrics.shows_back_to_top());
    })
}

fn create(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let element = document.create_element(tag)?.dyn_into::<HtmlElement>().map_err(JsValue::from)?;
    element.set_class_name(class);
    Ok(element)
}

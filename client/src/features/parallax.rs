//! Scroll-scrubbed parallax on images.

use std::rc::Rc;

use motion::props::{Prop, Props};
use motion::scroll::parallax_percent;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;
use crate::runtime::{ElementId, Runtime};

pub const ROOT: &str = ".parallax-img";

pub fn setup(runtime: &Rc<Runtime>, roots: Vec<Element>) -> Result<(), JsValue> {
    let mut images: Vec<(ElementId, Element)> = Vec::new();
    for image in roots {
        // The image moves; its container decides how far.
        let Some(container) = image.parent_element() else {
            continue;
        };
        images.push((runtime.register(dom::html(image)?), container));
    }
    super::on_scroll(runtime, move |rt| {
        let (_, viewport_height) = dom::viewport(rt.window());
        for (id, container) in &images {
            let shift = parallax_percent(dom::rect(container), viewport_height);
            rt.set(*id, &Props::new().with(Prop::YPercent, shift));
        }
    })
}

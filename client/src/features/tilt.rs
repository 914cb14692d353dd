//! 3D tilt on cards following the pointer.

use std::rc::Rc;

use motion::pointer::{tilt_reset_tween, tilt_tween};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;
use crate::runtime::Runtime;

pub const ROOT: &str = ".testimonial-card, .service-item, .industry-card";

pub fn setup(runtime: &Rc<Runtime>, roots: Vec<Element>) -> Result<(), JsValue> {
    for card in roots {
        let id = runtime.register(dom::html(card.clone())?);

        let rt = Rc::clone(runtime);
        let bounds = card.clone();
        dom::listen_mouse(&card, "mousemove", move |event| {
            rt.animate(id, tilt_tween(dom::rect(&bounds), dom::pointer(event)));
        })?;

        let rt = Rc::clone(runtime);
        dom::listen(&card, "mouseleave", move |_| rt.animate(id, tilt_reset_tween()))?;
    }
    Ok(())
}

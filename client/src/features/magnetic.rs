//! Buttons that lean toward the pointer and spring back.

use std::rc::Rc;

use motion::pointer::{magnetic_reset_tween, magnetic_tween};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;
use crate::runtime::Runtime;

pub const ROOT: &str = ".btn";

pub fn setup(runtime: &Rc<Runtime>, roots: Vec<Element>) -> Result<(), JsValue> {
    for button in roots {
        let id = runtime.register(dom::html(button.clone())?);

        let rt = Rc::clone(runtime);
        let bounds = button.clone();
        dom::listen_mouse(&button, "mousemove", move |event| {
            rt.animate(id, magnetic_tween(dom::rect(&bounds), dom::pointer(event)));
        })?;

        let rt = Rc::clone(runtime);
        dom::listen(&button, "mouseleave", move |_| rt.animate(id, magnetic_reset_tween()))?;
    }
    Ok(())
}

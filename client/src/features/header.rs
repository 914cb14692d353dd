//! Sticky header shadow.

use std::rc::Rc;

use motion::header::HeaderState;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;
use crate::runtime::Runtime;

pub const ROOT: &str = ".site-header";
const SCROLLED_CLASS: &str = "scrolled";

pub fn setup(runtime: &Rc<Runtime>, roots: Vec<Element>) -> Result<(), JsValue> {
    let Some(header) = roots.into_iter().next() else {
        return Ok(());
    };
    let rt = Rc::clone(runtime);
    dom::listen(runtime.window(), "scroll", move |_| {
        let (offset, _) = dom::viewport(rt.window());
        let changed = rt.state().header.on_scroll(offset);
        if let Some(state) = changed {
            dom::set_class(&header, SCROLLED_CLASS, state == HeaderState::Scrolled);
        }
    })
}

//! Mobile navigation toggle.

use std::rc::Rc;

use motion::nav::links_entrance;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::{self, DocumentProbe};
use crate::registry::Probe;
use crate::runtime::Runtime;

pub const ROOT: &str = ".mobile-toggle";
const MENU: &str = ".main-nav";
const LINKS: &str = ".main-nav li";
const OPEN_CLASS: &str = "active";

pub fn applies(probe: &DocumentProbe, _: &[Element]) -> bool {
    !probe.query(MENU).is_empty()
}

pub fn setup(runtime: &Rc<Runtime>, roots: Vec<Element>) -> Result<(), JsValue> {
    let (Some(toggle), Some(menu)) =
        (roots.into_iter().next(), dom::query_document(runtime.document(), MENU).into_iter().next())
    else {
        return Ok(());
    };
    let links = runtime.register_all(dom::query_document(runtime.document(), LINKS));
    runtime.state().nav_links = links;

    let rt = Rc::clone(runtime);
    dom::listen(&toggle, "click", move |_| {
        let opened = rt.state().nav.toggle();
        dom::set_class(&menu, OPEN_CLASS, opened);
        if opened {
            let links = rt.state().nav_links.clone();
            rt.play(links_entrance(&links), None);
        }
    })
}

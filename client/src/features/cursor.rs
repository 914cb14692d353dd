//! Custom cursor: a dot pinned to the pointer and an outline that trails it.

use std::rc::Rc;

use motion::consts::CURSOR_OUTLINE_DURATION;
use motion::ease::{Curve, Ease};
use motion::props::{Prop, Props};
use motion::tween::Tween;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::{self, DocumentProbe};
use crate::registry::Probe;
use crate::runtime::Runtime;

pub const ROOT: &str = ".cursor-dot";
const OUTLINE: &str = ".cursor-outline";
const INTERACTABLES: &str = "a, button, .service-item, .industry-card, .feature-card";
const HOVER_CLASS: &str = "hovering";

pub fn applies(probe: &DocumentProbe, _: &[Element]) -> bool {
    !probe.query(OUTLINE).is_empty()
}

pub fn setup(runtime: &Rc<Runtime>, roots: Vec<Element>) -> Result<(), JsValue> {
    let Some(dot) = roots.into_iter().next() else {
        return Ok(());
    };
    let dot = dom::html(dot)?;
    let Some(outline) = dom::query_document(runtime.document(), OUTLINE).into_iter().next() else {
        return Ok(());
    };
    let outline = runtime.register(dom::html(outline)?);
    // Centre the ring on the pointer.
    runtime.set(outline, &Props::new().with(Prop::XPercent, -50.0).with(Prop::YPercent, -50.0));

    let rt = Rc::clone(runtime);
    dom::listen_mouse(runtime.window(), "mousemove", move |event| {
        let at = dom::pointer(event);
        dom::set_style(&dot, "left", &format!("{}px", at.x));
        dom::set_style(&dot, "top", &format!("{}px", at.y));
        let follow = Tween::to(Props::new().with(Prop::X, at.x).with(Prop::Y, at.y))
            .duration(CURSOR_OUTLINE_DURATION)
            .ease(Ease::Power(2, Curve::Out));
        rt.animate(outline, follow);
    })?;

    let Some(body) = runtime.document().body() else {
        return Ok(());
    };
    for target in dom::query_document(runtime.document(), INTERACTABLES) {
        let enter = body.clone();
        dom::listen(&target, "mouseenter", move |_| dom::set_class(&enter, HOVER_CLASS, true))?;
        let leave = body.clone();
        dom::listen(&target, "mouseleave", move |_| dom::set_class(&leave, HOVER_CLASS, false))?;
    }
    Ok(())
}

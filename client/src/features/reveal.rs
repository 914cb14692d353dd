//! Scroll-triggered reveals, reversible in both directions.

use std::rc::Rc;

use motion::consts::REVEAL_TRIGGER_FRACTION;
use motion::reveal::{hidden_props, reveal_timeline};
use motion::scroll::{RevealAction, RevealTrigger};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;
use crate::runtime::{ElementId, RevealSlot, Runtime};

pub const ROOT: &str =
    ".section-header, .features-grid, .stats-grid, .services-highlight, .clients-grid, .about-content, .about-image";
const CHILDREN: &str =
    ".reveal-up, .reveal-left, .reveal-right, .stat-item, .feature-card, .service-item, .client-logo, h2, p";

pub fn setup(runtime: &Rc<Runtime>, roots: Vec<Element>) -> Result<(), JsValue> {
    for container in roots {
        let children = runtime.register_all(dom::query_all(&container, CHILDREN));
        if children.is_empty() {
            continue;
        }
        for child in &children {
            runtime.set(*child, &hidden_props());
        }
        runtime.state().reveals.push(RevealSlot {
            container,
            children,
            trigger: RevealTrigger::new(REVEAL_TRIGGER_FRACTION),
        });
    }
    super::on_scroll(runtime, update)
}

fn update(runtime: &Rc<Runtime>) {
    let (_, viewport_height) = dom::viewport(runtime.window());
    let due: Vec<(Vec<ElementId>, RevealAction)> = runtime
        .state()
        .reveals
        .iter_mut()
        .filter_map(|slot| {
            let top = dom::rect(&slot.container).top;
            slot.trigger.update(top, viewport_height).map(|action| (slot.children.clone(), action))
        })
        .collect();
    for (children, action) in due {
        runtime.play(reveal_timeline(&children, action), None);
    }
}

//! Stat counters that count up once when scrolled into view.

use std::rc::Rc;

use motion::counter::StatCounter;
use motion::tween::Tween;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;
use crate::runtime::{ElementId, Runtime};

pub const ROOT: &str = ".stat-number[data-target]";

pub fn setup(runtime: &Rc<Runtime>, roots: Vec<Element>) -> Result<(), JsValue> {
    for element in roots {
        let target = element.get_attribute("data-target").unwrap_or_default();
        let suffix = element.get_attribute("data-suffix");
        let Some(counter) = StatCounter::parse(&target, suffix.as_deref()) else {
            log::debug!("counter skipped: data-target {target:?} is not a number");
            continue;
        };
        runtime.register_counter(dom::html(element)?, counter);
    }
    super::on_scroll(runtime, update)
}

fn update(runtime: &Rc<Runtime>) {
    let (_, viewport_height) = dom::viewport(runtime.window());
    let due: Vec<(ElementId, Tween)> = runtime
        .state()
        .counters
        .iter_mut()
        .filter_map(|slot| {
            let top = dom::rect(&slot.element).top;
            slot.counter.on_scroll(top, viewport_height).then(|| (slot.id, slot.counter.tween()))
        })
        .collect();
    for (id, tween) in due {
        runtime.animate(id, tween);
    }
}

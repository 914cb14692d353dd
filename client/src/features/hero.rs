//! Preloader and hero entrance.
//!
//! The hero entrance is started by the preloader's completion cue, or at
//! once when the page has no preloader. The gate in the runtime state
//! keeps it from ever playing twice.

use std::rc::Rc;

use motion::hero::{HeroCues, HeroParts, drift_tween, hero_timeline, preloader_timeline};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;
use crate::runtime::{Cue, ElementId, Runtime};

pub const ROOT: &str = ".preloader, .hero-title, .hero-subtitle-tag";
const PRELOADER: &str = ".preloader";
const PRELOADER_LABEL: &str = ".preloader-text span";
const TAG: &str = ".hero-subtitle-tag";
const TITLE: &str = ".hero-title";
const SUBTITLE: &str = ".hero-subtitle";
const BUTTONS: &str = ".hero-buttons";
const PARTICLES: &str = ".hero-particles span";
const SHIMMER: &str = ".text-shimmer";
const TAG_ACTIVE_CLASS: &str = "active";

pub fn setup(runtime: &Rc<Runtime>, _roots: Vec<Element>) -> Result<(), JsValue> {
    let parts = Rc::new(HeroParts {
        tag: first(runtime, TAG),
        title: first(runtime, TITLE),
        subtitle: first(runtime, SUBTITLE),
        buttons: first(runtime, BUTTONS),
        particles: runtime.register_all(dom::query_document(runtime.document(), PARTICLES)),
    });

    for (index, particle) in parts.particles.iter().enumerate() {
        let drift = runtime.with_rng(|rng| drift_tween(rng, index));
        runtime.animate(*particle, drift);
    }

    match first(runtime, PRELOADER) {
        Some(panel) => {
            let label = runtime.register_all(dom::query_document(runtime.document(), PRELOADER_LABEL));
            let done: Cue = Rc::new(move |rt: &Rc<Runtime>| play_hero(rt, &parts));
            runtime.play(preloader_timeline(&label, panel), Some(done));
        }
        None => play_hero(runtime, &parts),
    }
    Ok(())
}

fn first(runtime: &Runtime, selector: &str) -> Option<ElementId> {
    let element = dom::query_document(runtime.document(), selector).into_iter().next()?;
    dom::html(element).ok().map(|html| runtime.register(html))
}

fn play_hero(runtime: &Rc<Runtime>, parts: &HeroParts<ElementId>) {
    let opened = runtime.state().hero_gate.open();
    if !opened {
        return;
    }

    let tag = parts.tag;
    let tag_landed: Cue = Rc::new(move |rt: &Rc<Runtime>| {
        if let Some(tag) = tag.and_then(|id| rt.element(id)) {
            dom::set_class(&tag, TAG_ACTIVE_CLASS, true);
        }
    });
    let shimmer: Cue = Rc::new(|rt: &Rc<Runtime>| {
        for element in dom::query_document(rt.document(), SHIMMER) {
            if let Ok(element) = dom::html(element) {
                dom::set_style(&element, "animation-play-state", "running");
            }
        }
    });

    let timeline = runtime.with_rng(|rng| hero_timeline(parts, HeroCues { tag_landed, shimmer }, rng));
    runtime.play(timeline, None);
    log::debug!("hero entrance started");
}

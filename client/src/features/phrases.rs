//! Rotating phrase text in the hero headline.

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use motion::consts::{PHRASE_INITIAL_DELAY, PHRASE_INTERVAL};
use motion::phrases::{DEFAULT_PHRASES, PhraseRotator, cross_fade, entrance_tween, hidden_props};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::runtime::{Cue, PhraseSlots, Runtime};

pub const ROOT: &str = "#text-transition";
const WORD_CLASS: &str = "text-transition-word";

pub fn setup(runtime: &Rc<Runtime>, roots: Vec<Element>) -> Result<(), JsValue> {
    let Some(container) = roots.into_iter().next() else {
        return Ok(());
    };
    let rotator = PhraseRotator::new(DEFAULT_PHRASES);
    let document = runtime.document();

    // Sizing spacer: holds the container open at the longest phrase's width.
    if let Some(longest) = rotator.longest() {
        let spacer = span(document)?;
        spacer.set_text_content(Some(longest));
        for (name, value) in
            [("visibility", "hidden"), ("opacity", "0"), ("position", "static"), ("display", "inline-block"), ("height", "0")]
        {
            dom::set_style(&spacer, name, value);
        }
        container.append_child(&spacer)?;
    }

    let mut spans = Vec::with_capacity(rotator.phrases().len());
    for phrase in rotator.phrases() {
        let word = span(document)?;
        word.class_list().add_1(WORD_CLASS)?;
        word.set_text_content(Some(phrase));
        container.append_child(&word)?;
        let id = runtime.register(word);
        runtime.set(id, &hidden_props());
        spans.push(id);
    }
    if let Some(first) = spans.first() {
        runtime.animate(*first, entrance_tween());
    }

    let rotates = rotator.can_rotate();
    runtime.state().phrases = Some(PhraseSlots { rotator, spans });
    if rotates {
        let rt = Rc::clone(runtime);
        Timeout::new(super::millis(PHRASE_INITIAL_DELAY), move || {
            let ticker = Rc::clone(&rt);
            rt.keep(Interval::new(super::millis(PHRASE_INTERVAL), move || advance(&ticker)));
        })
        .forget();
    }
    Ok(())
}

fn span(document: &Document) -> Result<HtmlElement, JsValue> {
    document.create_element("span")?.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

/// One interval tick. Dropped while a transition is still running.
fn advance(runtime: &Rc<Runtime>) {
    let step = {
        let mut state = runtime.state();
        let Some(slots) = state.phrases.as_mut() else {
            return;
        };
        let Some(step) = slots.rotator.begin() else {
            return;
        };
        slots.spans.get(step.outgoing).copied().zip(slots.spans.get(step.incoming).copied())
    };
    let Some((outgoing, incoming)) = step else {
        return;
    };
    let settle: Cue = Rc::new(|rt: &Rc<Runtime>| {
        if let Some(slots) = rt.state().phrases.as_mut() {
            slots.rotator.finish();
        }
    });
    runtime.play(cross_fade(outgoing, incoming), Some(settle));
}

//! The page controller.
//!
//! DESIGN
//! ======
//! One [`Runtime`] exists per page load, shared by every feature through an
//! `Rc`. It owns:
//! - the animation [`Stage`] and the table mapping stage keys to elements,
//! - the interactive state of every feature ([`Controllers`]),
//! - live repeating timers,
//! - the `requestAnimationFrame` loop.
//!
//! The frame loop only runs while the stage has work. Anything that starts
//! a tween or sets a value calls [`Runtime::wake`]; each frame ticks the
//! stage, writes the changed styles and counter text, then runs due cues.
//! Cues are closures over the runtime, so a finished timeline can start the
//! next one or update feature state.
//!
//! Borrow discipline: `stage`, `elements` and `state` are separate
//! `RefCell`s and no borrow is held across a call into another feature or
//! a cue.

use std::cell::{Cell, RefCell, RefMut};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use motion::counter::StatCounter;
use motion::header::HeaderShadow;
use motion::hero::HeroGate;
use motion::nav::NavToggle;
use motion::phrases::PhraseRotator;
use motion::props::{Prop, Props};
use motion::scroll::RevealTrigger;
use motion::stage::{Stage, Update};
use motion::style;
use motion::theme::ThemeController;
use motion::timeline::Timeline;
use motion::tween::Tween;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom::{self, LocalStore};

/// Stage key for an element registered with the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// Deferred work released by the stage at a point in time.
pub type Cue = Rc<dyn Fn(&Rc<Runtime>)>;

pub type RuntimeTimeline = Timeline<ElementId, Cue>;

/// How stage updates reach an element.
#[derive(Debug, Clone, Copy)]
enum Binding {
    /// Props become inline styles.
    Style,
    /// The `Value` channel becomes the text of counter slot `n`.
    Counter(usize),
}

struct Bound {
    element: HtmlElement,
    binding: Binding,
}

pub struct PhraseSlots {
    pub rotator: PhraseRotator,
    pub spans: Vec<ElementId>,
}

pub struct CounterSlot {
    pub id: ElementId,
    pub element: Element,
    pub counter: StatCounter,
}

pub struct RevealSlot {
    pub container: Element,
    pub children: Vec<ElementId>,
    pub trigger: RevealTrigger,
}

/// Interactive state of every feature.
#[derive(Default)]
pub struct Controllers {
    pub theme: Option<ThemeController<LocalStore>>,
    pub theme_toggles: Vec<Element>,
    pub header: HeaderShadow,
    pub nav: NavToggle,
    pub nav_links: Vec<ElementId>,
    pub hero_gate: HeroGate,
    pub phrases: Option<PhraseSlots>,
    pub counters: Vec<CounterSlot>,
    pub reveals: Vec<RevealSlot>,
}

pub struct Runtime {
    window: Window,
    document: Document,
    epoch: f64,
    stage: RefCell<Stage<ElementId, Cue>>,
    elements: RefCell<Vec<Bound>>,
    state: RefCell<Controllers>,
    intervals: RefCell<Vec<Interval>>,
    rng: RefCell<SmallRng>,
    frame_pending: Cell<bool>,
}

impl Runtime {
    pub fn new() -> Result<Rc<Self>, JsValue> {
        let window = dom::window()?;
        let document = dom::document()?;
        let seed = js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits();
        let epoch = clock_ms(&window);
        Ok(Rc::new(Self {
            window,
            document,
            epoch,
            stage: RefCell::new(Stage::new()),
            elements: RefCell::new(Vec::new()),
            state: RefCell::new(Controllers::default()),
            intervals: RefCell::new(Vec::new()),
            rng: RefCell::new(SmallRng::seed_from_u64(seed)),
            frame_pending: Cell::new(false),
        }))
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Seconds since the runtime was created.
    pub fn now(&self) -> f64 {
        (clock_ms(&self.window) - self.epoch) / 1000.0
    }

    pub fn state(&self) -> RefMut<'_, Controllers> {
        self.state.borrow_mut()
    }

    pub fn with_rng<T>(&self, f: impl FnOnce(&mut SmallRng) -> T) -> T {
        f(&mut self.rng.borrow_mut())
    }

    /// Keep a repeating timer alive for the rest of the page.
    pub fn keep(&self, interval: Interval) {
        self.intervals.borrow_mut().push(interval);
    }

    /// Register an element whose props are written as inline styles.
    /// An element registered twice keeps one key, so effects from
    /// different features compose into one transform.
    pub fn register(&self, element: HtmlElement) -> ElementId {
        let existing = self.elements.borrow().iter().position(|b| {
            let known: &JsValue = b.element.as_ref();
            let candidate: &JsValue = element.as_ref();
            matches!(b.binding, Binding::Style) && known == candidate
        });
        match existing {
            Some(index) => ElementId(index),
            None => self.bind(element, Binding::Style),
        }
    }

    /// Register every element that is an `HtmlElement`.
    pub fn register_all(&self, elements: Vec<Element>) -> Vec<ElementId> {
        elements.into_iter().filter_map(|e| dom::html(e).ok()).map(|e| self.register(e)).collect()
    }

    /// Register a stat counter: its `Value` channel is rendered as text.
    pub fn register_counter(&self, element: HtmlElement, counter: StatCounter) -> ElementId {
        let slot = self.state.borrow().counters.len();
        let plain: Element = element.clone().into();
        let id = self.bind(element, Binding::Counter(slot));
        self.state.borrow_mut().counters.push(CounterSlot { id, element: plain, counter });
        id
    }

    fn bind(&self, element: HtmlElement, binding: Binding) -> ElementId {
        let mut elements = self.elements.borrow_mut();
        elements.push(Bound { element, binding });
        ElementId(elements.len() - 1)
    }

    pub fn element(&self, id: ElementId) -> Option<HtmlElement> {
        self.elements.borrow().get(id.0).map(|b| b.element.clone())
    }

    pub fn animate(self: &Rc<Self>, id: ElementId, tween: Tween) {
        let now = self.now();
        self.stage.borrow_mut().animate(id, tween, now);
        self.wake();
    }

    pub fn set(self: &Rc<Self>, id: ElementId, props: &Props) {
        self.stage.borrow_mut().set(id, props);
        self.wake();
    }

    pub fn play(self: &Rc<Self>, timeline: RuntimeTimeline, on_complete: Option<Cue>) {
        let now = self.now();
        timeline.play(&mut self.stage.borrow_mut(), now, on_complete);
        self.wake();
    }

    /// Ensure a frame is scheduled.
    pub fn wake(self: &Rc<Self>) {
        if self.frame_pending.replace(true) {
            return;
        }

        let runtime = Rc::clone(self);
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            runtime.frame();
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(_) => *holder.borrow_mut() = Some(cb),
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {err:?}");
                self.frame_pending.set(false);
            }
        }
    }

    fn frame(self: &Rc<Self>) {
        self.frame_pending.set(false);
        let now = self.now();
        let tick = self.stage.borrow_mut().tick(now);
        for update in &tick.updates {
            self.write(update);
        }
        for cue in tick.cues {
            cue(self);
        }
        if !self.stage.borrow().is_idle() {
            self.wake();
        }
    }

    fn write(&self, update: &Update<ElementId>) {
        let elements = self.elements.borrow();
        let Some(bound) = elements.get(update.target.0) else {
            return;
        };
        match bound.binding {
            Binding::Style => {
                for (name, value) in style::css(&update.props) {
                    dom::set_style(&bound.element, name, &value);
                }
            }
            Binding::Counter(slot) => {
                let state = self.state.borrow();
                if let Some(slot) = state.counters.get(slot) {
                    let text = slot.counter.text(update.props.get_or_rest(Prop::Value));
                    bound.element.set_text_content(Some(&text));
                }
            }
        }
    }
}

fn clock_ms(window: &Window) -> f64 {
    window.performance().map_or_else(js_sys::Date::now, |p| p.now())
}

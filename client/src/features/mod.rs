//! Page features, one module per component.
//!
//! [`all`] is the registration list walked once at startup. Order only
//! matters for features that create markup another feature could match;
//! none currently do.

pub mod contact;
pub mod counters;
pub mod cursor;
pub mod header;
pub mod hero;
pub mod magnetic;
pub mod nav;
pub mod parallax;
pub mod phrases;
pub mod progress;
pub mod reveal;
pub mod theme;
pub mod tilt;

use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::dom::{self, DocumentProbe};
use crate::registry::Feature;
use crate::runtime::Runtime;

pub type PageFeature = Feature<DocumentProbe, Rc<Runtime>, JsValue>;

pub fn all() -> Vec<PageFeature> {
    vec![
        Feature::new("cursor", cursor::ROOT, cursor::setup).when(cursor::applies),
        Feature::new("hero", hero::ROOT, hero::setup),
        Feature::new("reveal", reveal::ROOT, reveal::setup),
        Feature::new("parallax", parallax::ROOT, parallax::setup),
        Feature::new("header", header::ROOT, header::setup),
        Feature::new("theme-preference", theme::PREFERENCE_ROOT, theme::setup_preference),
        Feature::new("theme", theme::ROOT, theme::setup),
        Feature::new("phrases", phrases::ROOT, phrases::setup),
        Feature::new("nav", nav::ROOT, nav::setup).when(nav::applies),
        Feature::new("counters", counters::ROOT, counters::setup),
        Feature::new("tilt", tilt::ROOT, tilt::setup),
        Feature::new("magnetic", magnetic::ROOT, magnetic::setup),
        Feature::new("progress", progress::ROOT, progress::setup),
        Feature::new("contact", contact::ROOT, contact::setup),
    ]
}

/// Run `update` now and again on every scroll and resize.
fn on_scroll(runtime: &Rc<Runtime>, update: impl Fn(&Rc<Runtime>) + 'static) -> Result<(), JsValue> {
    update(runtime);
    let update = Rc::new(update);
    for event in ["scroll", "resize"] {
        let rt = Rc::clone(runtime);
        let update = Rc::clone(&update);
        dom::listen(runtime.window(), event, move |_| update(&rt))?;
    }
    Ok(())
}

fn millis(seconds: f64) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ms = (seconds * 1000.0).round().max(0.0) as u32;
    ms
}

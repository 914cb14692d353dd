//! Light/dark theme.
//!
//! Two registrations share this module. The preference feature, rooted at
//! the document element, loads the stored theme and applies it on every
//! page. The toggle feature wires each `.theme-toggle` control and keeps
//! its icon in step. The active theme lives in the runtime's
//! [`ThemeController`].

use std::rc::Rc;

use motion::theme::{THEME_ATTRIBUTE, Theme, ThemeController};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::{self, LocalStore};
use crate::runtime::Runtime;

pub const PREFERENCE_ROOT: &str = "html";
pub const ROOT: &str = ".theme-toggle";
const ICON: &str = "i";

/// Apply the stored preference to the document root.
pub fn setup_preference(runtime: &Rc<Runtime>, roots: Vec<Element>) -> Result<(), JsValue> {
    let Some(root) = roots.into_iter().next() else {
        return Ok(());
    };
    let theme = load(runtime);
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str())
}

pub fn setup(runtime: &Rc<Runtime>, roots: Vec<Element>) -> Result<(), JsValue> {
    let theme = load(runtime);
    runtime.state().theme_toggles.clone_from(&roots);
    render(runtime, theme)?;

    for toggle in &roots {
        let rt = Rc::clone(runtime);
        dom::listen(toggle, "click", move |_| {
            let next = rt.state().theme.as_mut().map(ThemeController::toggle);
            let Some(next) = next else {
                return;
            };
            if let Err(err) = render(&rt, next) {
                log::warn!("theme not applied: {err:?}");
            }
        })?;
    }
    Ok(())
}

/// Current theme, loading the controller on first use.
fn load(runtime: &Runtime) -> Theme {
    let mut state = runtime.state();
    state.theme.get_or_insert_with(|| ThemeController::load(LocalStore::open(runtime.window()))).current()
}

fn render(runtime: &Runtime, theme: Theme) -> Result<(), JsValue> {
    if let Some(root) = runtime.document().document_element() {
        root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    }
    let toggles = runtime.state().theme_toggles.clone();
    for toggle in toggles {
        if let Some(icon) = toggle.query_selector(ICON)? {
            dom::set_class(&icon, theme.stale_icon(), false);
            dom::set_class(&icon, theme.icon(), true);
        }
    }
    Ok(())
}

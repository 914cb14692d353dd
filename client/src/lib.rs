//! Presentation controller for the storefront site.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled to WebAssembly with `--features browser` and loaded by the entry
//! document as an ES module. On start it builds one `Runtime` and
//! walks the feature list through the registry. The
//! animation engine itself lives in the `motion` crate.
//!
//! Without the `browser` feature only the browser-independent parts
//! (`registry`, `contact`) are compiled, which is what the unit tests
//! exercise.

pub mod contact;
pub mod registry;

#[cfg(feature = "browser")]
mod dom;
#[cfg(feature = "browser")]
mod features;
#[cfg(feature = "browser")]
mod runtime;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::*;

/// Module entry point. The script is loaded as a deferred module, so the
/// document has been parsed by the time this runs.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).map_err(|err| JsValue::from_str(&err.to_string()))?;

    let runtime = runtime::Runtime::new()?;
    let probe = dom::DocumentProbe(runtime.document().clone());
    for report in registry::run(&probe, &runtime, &features::all()) {
        match report.outcome {
            registry::Outcome::Installed { roots } => log::debug!("{}: installed on {roots} element(s)", report.name),
            registry::Outcome::Skipped(reason) => log::debug!("{}: skipped ({reason:?})", report.name),
            registry::Outcome::Failed(err) => log::warn!("{}: setup failed: {err:?}", report.name),
        }
    }
    Ok(())
}

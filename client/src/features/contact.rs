//! Contact form submission.
//!
//! The form posts JSON to the delivery service and reports the outcome in
//! its `.form-status` element. Nothing is validated on this side.

use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, FormData, HtmlFormElement};

use crate::contact::{CONTACT_ENDPOINT, ContactReply, ContactRequest, FIELDS, status_text};
use crate::dom;
use crate::runtime::Runtime;

pub const ROOT: &str = "#contact-form";
const STATUS: &str = ".form-status";

pub fn setup(_runtime: &Rc<Runtime>, roots: Vec<Element>) -> Result<(), JsValue> {
    let Some(form) = roots.into_iter().next() else {
        return Ok(());
    };
    let form = form.dyn_into::<HtmlFormElement>().map_err(JsValue::from)?;
    let target = form.clone();
    dom::listen(&target, "submit", move |event| {
        event.prevent_default();
        let request = match collect(&form) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("contact form unreadable: {err:?}");
                return;
            }
        };
        let form = form.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let reply = match send(&request).await {
                Ok(reply) => Some(reply),
                Err(err) => {
                    log::warn!("contact submission failed: {err}");
                    None
                }
            };
            if reply.as_ref().is_some_and(|r| r.success) {
                form.reset();
            }
            if let Ok(Some(status)) = form.query_selector(STATUS) {
                status.set_text_content(Some(status_text(reply.as_ref())));
            }
        });
    })
}

fn collect(form: &HtmlFormElement) -> Result<ContactRequest, JsValue> {
    let data = FormData::new_with_form(form)?;
    Ok(ContactRequest::from_fields(FIELDS.iter().map(|field| (*field, data.get(field).as_string().unwrap_or_default()))))
}

async fn send(request: &ContactRequest) -> Result<ContactReply, gloo_net::Error> {
    let response = Request::post(CONTACT_ENDPOINT).json(request)?.send().await?;
    response.json::<ContactReply>().await
}

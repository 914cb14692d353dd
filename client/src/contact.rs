//! Contact form payload and status text.
//!
//! The browser side (`features::contact`) collects the form and posts it;
//! everything here is plain data so it runs under `cargo test` without a
//! browser.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Form field names, in the order they appear on the page.
pub const FIELDS: [&str; 5] = ["name", "phone", "email", "service", "message"];

pub const FAILURE_MESSAGE: &str = "Sorry, your message could not be sent. Please try again.";

/// Body posted to [`CONTACT_ENDPOINT`]. Every field is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl ContactRequest {
    /// Build from `(field, value)` pairs. Unknown fields are ignored,
    /// missing ones stay empty.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = (&'a str, String)>) -> Self {
        let mut request = Self::default();
        for (field, value) in fields {
            let slot = match field {
                "name" => &mut request.name,
                "phone" => &mut request.phone,
                "email" => &mut request.email,
                "service" => &mut request.service,
                "message" => &mut request.message,
                _ => continue,
            };
            *slot = value;
        }
        request
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactReply {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Text shown under the form once the request settles.
#[must_use]
pub fn status_text(reply: Option<&ContactReply>) -> &str {
    match reply {
        Some(reply) if reply.success && !reply.message.is_empty() => &reply.message,
        _ => FAILURE_MESSAGE,
    }
}

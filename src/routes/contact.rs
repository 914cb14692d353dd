//! Contact form endpoint.
//!
//! ERROR HANDLING
//! ==============
//! The endpoint never fails. A body that cannot be read or parsed is logged
//! and handled as an empty submission, and a notifier error is logged. The
//! visitor always gets the same acknowledgement.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::convert::Infallible;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use serde::{Deserialize, Serialize};

use crate::services::notify::ContactSubmission;
use crate::state::AppState;

pub const RECEIVED_MESSAGE: &str = "Message received successfully!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    #[must_use]
    pub fn received() -> Self {
        Self { success: true, message: RECEIVED_MESSAGE.to_string() }
    }
}

/// Submission extracted from either a JSON or a URL-encoded form body.
/// Extraction cannot be rejected.
#[derive(Debug, Default)]
pub struct ContactPayload(pub ContactSubmission);

impl<S: Send + Sync> FromRequest<S> for ContactPayload {
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            return Ok(match Form::<ContactSubmission>::from_request(req, state).await {
                Ok(Form(submission)) => Self(submission),
                Err(rejection) => {
                    tracing::warn!(error = %rejection, "unreadable contact form body");
                    Self::default()
                }
            });
        }

        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(Self(parse_json(&bytes))),
            Err(rejection) => {
                tracing::warn!(error = %rejection, "unreadable contact body");
                Ok(Self::default())
            }
        }
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

pub(crate) fn parse_json(bytes: &[u8]) -> ContactSubmission {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!("empty contact body");
        return ContactSubmission::default();
    }
    match serde_json::from_slice(bytes) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::warn!(error = %e, "malformed contact body");
            ContactSubmission::default()
        }
    }
}

/// `POST /api/contact`
pub async fn submit(
    State(state): State<AppState>,
    ContactPayload(submission): ContactPayload,
) -> Json<ContactResponse> {
    if submission.is_empty() {
        tracing::info!("empty contact submission");
    }
    if let Err(e) = state.notifier.deliver(&submission).await {
        tracing::warn!(error = %e, "contact notification failed");
    }
    Json(ContactResponse::received())
}

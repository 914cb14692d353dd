//! Contact submission delivery.
//!
//! DESIGN
//! ======
//! The contact route hands every submission to a [`ContactNotifier`] and
//! answers the visitor regardless of the outcome. The default
//! [`LogNotifier`] only records the submission in the log; a mail or CRM
//! integration would be another implementation of the same trait.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// One contact form submission. Every field is optional free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    #[serde(deserialize_with = "free_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "free_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "free_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "free_text")]
    pub service: Option<String>,
    #[serde(deserialize_with = "free_text")]
    pub message: Option<String>,
}

impl ContactSubmission {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.phone, &self.email, &self.service, &self.message].iter().all(|f| f.is_none())
    }
}

/// Accept any scalar as text: strings as-is, numbers and booleans in their
/// JSON spelling, `null` as absent. Arrays and objects are rendered as JSON.
fn free_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification channel unavailable: {0}")]
    Unavailable(String),
}

/// Delivery of a submission to whoever handles enquiries.
#[async_trait::async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), NotifyError>;
}

/// Writes each submission to the log and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl ContactNotifier for LogNotifier {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        let submission_id = Uuid::new_v4();
        tracing::info!(
            %submission_id,
            name = submission.name.as_deref().unwrap_or(""),
            phone = submission.phone.as_deref().unwrap_or(""),
            email = submission.email.as_deref().unwrap_or(""),
            service = submission.service.as_deref().unwrap_or(""),
            message = submission.message.as_deref().unwrap_or(""),
            "contact form submission"
        );
        Ok(())
    }
}

//! Service submitting the signup forms to their configured endpoints.
//!
//! One instance per form. The async submission is driven on the Slint
//! event loop wrapped in `async_compat::Compat`; callers apply the outcome
//! to the form's phase machine.

use crate::error::SubmitError;
use log::debug;

/// Result of one submission attempt.
pub type SubmitResult = Result<(), SubmitError>;

/// Posts a form's field data to a fixed endpoint.
#[derive(Clone)]
pub struct FormService {
    endpoint: String,
}

impl FormService {
    /// Creates a service posting to `endpoint`.
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    /// Submits `fields` as a URL-encoded form body, requesting a
    /// JSON-capable response. Non-success statuses and transport failures
    /// both surface as errors; the caller owns the timed UI revert.
    pub async fn submit(&self, fields: &[(&str, String)]) -> SubmitResult {
        debug!("Submitting {} field(s) to {}", fields.len(), self.endpoint);

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("slint-gallery-showcase/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let response = client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(fields)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        debug!("Submission to {} accepted ({})", self.endpoint, status);
        Ok(())
    }
}

//! Contact operations
//!
//! Sends an inquiry through the shared client and drives the form through
//! one full submission.

use log::debug;

use super::form::ContactForm;
use super::payload::ContactRequest;
use crate::api::ApiClient;
use crate::error::{ApiError, ContactError};

/// Endpoint receiving contact inquiries.
pub const CONTACT_PATH: &str = "/contact";

/// Posts one inquiry. The response body is logged and otherwise ignored.
pub async fn send_inquiry(client: &ApiClient, request: &ContactRequest) -> Result<(), ApiError> {
    let response = client.post(CONTACT_PATH, request).await?;
    debug!("Contact response: {}", response);
    Ok(())
}

/// Validates and submits `form`, leaving it in `Success` or `Error`.
pub async fn submit(form: &mut ContactForm, client: &ApiClient) -> Result<(), ContactError> {
    let request = form.begin_submit()?;
    let outcome = send_inquiry(client, &request).await;
    form.finish_submit(outcome)
}

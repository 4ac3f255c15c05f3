//! Contact form state
//!
//! Owns the field values, their validation flags and the submission status.
//! Every setter re-runs the validator over all fields.
//!
//! Submission is split in two so the caller does not hold the form while the
//! request is in flight:
//!
//! 1. [`ContactForm::begin_submit`] validates, enters `Submitting` and hands
//!    back a snapshot of the body to send.
//! 2. [`ContactForm::finish_submit`] applies the outcome: reset and `Success`,
//!    or `Error` with the fields kept.

use log::{debug, info, warn};

use super::fields::Field;
use super::payload::ContactRequest;
use super::status::SubmitStatus;
use super::validator::{ValidationState, validate};
use crate::error::{ApiError, ContactError};

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: ContactRequest,
    errors: ValidationState,
    status: SubmitStatus,
}

impl ContactForm {
    /// Empty form: no flags raised, status `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn values(&self) -> &ContactRequest {
        &self.values
    }

    pub fn errors(&self) -> &ValidationState {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Inline messages for every invalid field, in form order.
    pub fn error_messages(&self) -> Vec<(Field, &'static str)> {
        self.errors
            .invalid_fields()
            .into_iter()
            .map(|field| (field, field.error_message()))
            .collect()
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        self.status != SubmitStatus::Submitting && !self.errors.has_errors()
    }

    // --------------------
    // Setter methods
    // --------------------

    pub fn set_inquiry_type(&mut self, value: impl Into<String>) {
        self.values.inquiry_type = value.into();
        self.on_change();
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.values.name = value.into();
        self.on_change();
    }

    pub fn set_company(&mut self, value: impl Into<String>) {
        self.values.company = value.into();
        self.on_change();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.values.phone = value.into();
        self.on_change();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.values.email = value.into();
        self.on_change();
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        self.values.content = value.into();
        self.on_change();
    }

    pub fn set_agree_to_terms(&mut self, value: bool) {
        self.values.agree_to_terms = value;
        self.on_change();
    }

    fn on_change(&mut self) {
        self.errors = validate(&self.values);
        if self.status == SubmitStatus::Error {
            self.status = SubmitStatus::Idle;
        }
    }

    // --------------------
    // Submission
    // --------------------

    /// Validates the form and, if every field passes, enters `Submitting`
    /// and returns the body to send.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, ContactError> {
        if self.status == SubmitStatus::Submitting {
            return Err(ContactError::AlreadySubmitting);
        }

        self.errors = validate(&self.values);
        if self.errors.has_errors() {
            warn!("Contact submission blocked: {}", self.errors);
            self.status = SubmitStatus::Error;
            return Err(ContactError::Invalid(self.errors));
        }

        self.status = SubmitStatus::Submitting;
        debug!("Contact submission started");
        Ok(self.values.clone())
    }

    /// Applies the result of the request started by `begin_submit`.
    pub fn finish_submit(&mut self, outcome: Result<(), ApiError>) -> Result<(), ContactError> {
        if self.status != SubmitStatus::Submitting {
            return Err(ContactError::NotSubmitting);
        }

        match outcome {
            Ok(()) => {
                self.reset();
                self.status = SubmitStatus::Success;
                info!("Contact inquiry submitted");
                Ok(())
            }
            Err(e) => {
                warn!("Contact submission failed: {}", e);
                self.status = SubmitStatus::Error;
                Err(ContactError::Request(e))
            }
        }
    }

    /// Restores every field to its initial value and clears the flags.
    pub fn reset(&mut self) {
        self.values = ContactRequest::default();
        self.errors = ValidationState::default();
        self.status = SubmitStatus::Idle;
    }
}

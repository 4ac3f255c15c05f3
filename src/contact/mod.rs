//! Contact inquiry form
//!
//! Holds the seven inquiry fields, recomputes their validity on every edit,
//! and drives the submission status through a single request to `/contact`.

pub mod fields;
pub mod form;
pub mod operations;
pub mod payload;
pub mod status;
pub mod validator;

pub use fields::{Field, INQUIRY_TYPES};
pub use form::ContactForm;
pub use operations::{CONTACT_PATH, send_inquiry, submit};
pub use payload::ContactRequest;
pub use status::SubmitStatus;
pub use validator::{ValidationState, validate};

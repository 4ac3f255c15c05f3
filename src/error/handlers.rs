//! Error handlers
//!
//! Maps errors to log lines and to the generic messages shown to the user.
//! The user never sees the cause; it only goes to the log.

use crate::error::types::{ApiError, AuthError, ClientError, ContactError};
use log::error;

/// Shown for any failed login, whatever the cause.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";

/// Shown for any failed contact submission.
pub const CONTACT_FAILED_MESSAGE: &str = "문의 제출 중 오류가 발생했습니다. 다시 시도해 주세요.";

/// Shown when a submission is blocked by invalid fields.
pub const CONTACT_INVALID_MESSAGE: &str = "입력 내용을 확인해 주세요.";

/// Handle a client error
pub fn handle_error(err: &ClientError) {
    error!("Client error: {}", err);
}

/// Convert error to the message shown to the user
pub fn user_message(err: &ClientError) -> &'static str {
    match err {
        ClientError::Auth(_) => LOGIN_FAILED_MESSAGE,
        ClientError::Contact(e) => contact_message(e),
        ClientError::Store(_) => "Could not access stored credentials.",
        ClientError::Api(e) => api_message(e),
        ClientError::Config(_) => "Invalid client configuration.",
    }
}

fn contact_message(err: &ContactError) -> &'static str {
    match err {
        ContactError::Invalid(_) => CONTACT_INVALID_MESSAGE,
        ContactError::AlreadySubmitting => "문의를 제출하는 중입니다.",
        ContactError::NotSubmitting | ContactError::Request(_) => CONTACT_FAILED_MESSAGE,
    }
}

fn api_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Status { status, .. } if status.as_u16() == 401 => {
            "You are not logged in or your session has expired."
        }
        _ => "The request could not be completed.",
    }
}

/// Whether the error was caused by the backend rejecting the request rather
/// than the request never reaching it.
pub fn is_rejected_by_server(err: &AuthError) -> bool {
    matches!(err, AuthError::Request(ApiError::Status { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ValidationState;
    use reqwest::StatusCode;

    #[test]
    fn login_failures_share_one_message() {
        let status = ClientError::Auth(AuthError::Request(ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: String::new(),
        }));
        let url = ClientError::Auth(AuthError::Request(ApiError::InvalidUrl("x".into())));
        assert_eq!(user_message(&status), LOGIN_FAILED_MESSAGE);
        assert_eq!(user_message(&url), LOGIN_FAILED_MESSAGE);
    }

    #[test]
    fn contact_messages() {
        let invalid = ClientError::Contact(ContactError::Invalid(ValidationState::default()));
        assert_eq!(user_message(&invalid), CONTACT_INVALID_MESSAGE);

        let failed = ClientError::Contact(ContactError::Request(ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        }));
        assert_eq!(user_message(&failed), CONTACT_FAILED_MESSAGE);
    }

    #[test]
    fn distinguishes_server_rejection() {
        let rejected = AuthError::Request(ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: String::new(),
        });
        assert!(is_rejected_by_server(&rejected));
        assert!(!is_rejected_by_server(&AuthError::Request(ApiError::InvalidUrl(
            "x".into()
        ))));
    }
}

//! Authentication result types
//!
//! Defines the login wire types and the outcome reported to the user.

use serde::{Deserialize, Serialize};

use crate::credentials::Credential;
use crate::error::handlers::LOGIN_FAILED_MESSAGE;

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token pair returned by a successful login
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<LoginResponse> for Credential {
    fn from(response: LoginResponse) -> Self {
        Credential {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        }
    }
}

/// Result of a login attempt as seen by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failed,
}

impl LoginOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            LoginOutcome::Success => "Login successful!",
            LoginOutcome::Failed => LOGIN_FAILED_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }
}

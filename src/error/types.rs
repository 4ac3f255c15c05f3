//! Error types
//!
//! Defines domain-specific error types for each module of the client.

use std::io;

use reqwest::StatusCode;
use thiserror::Error;

use crate::contact::ValidationState;

/// Credential store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Credential store lock poisoned")]
    Poisoned,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Corrupt credential file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Request client errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// An interceptor rejected the request before it was sent.
    #[error("Request interception failed: {0}")]
    Interceptor(#[from] StoreError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with {status}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Login flow errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Login request failed: {0}")]
    Request(#[from] ApiError),

    #[error("Failed to store credentials: {0}")]
    Store(#[from] StoreError),
}

/// Contact form submission errors
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Form has invalid fields: {0}")]
    Invalid(ValidationState),

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("No submission in progress")]
    NotSubmitting,

    #[error("Submission failed: {0}")]
    Request(#[from] ApiError),
}

/// General client error that encompasses all error types
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),

    #[error("Credential store error: {0}")]
    Store(#[from] StoreError),

    #[error("Request error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

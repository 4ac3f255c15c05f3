//! Request interception
//!
//! Interceptors run after a request is built and before it is sent. An error
//! from any interceptor rejects the request; nothing reaches the network.

use std::sync::Arc;

use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::credentials::{ACCESS_TOKEN_KEY, CredentialStore};
use crate::error::ApiError;

/// Hook that may mutate an outgoing request.
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: &mut Request) -> Result<(), ApiError>;
}

/// Attaches the stored access token as a bearer credential.
///
/// With no stored token, or an empty one, the `Authorization` header is still
/// set, to an empty value. Callers can rely on the header always being present.
#[derive(Clone)]
pub struct BearerAuth {
    store: Arc<dyn CredentialStore>,
}

impl BearerAuth {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }
}

impl RequestInterceptor for BearerAuth {
    fn intercept(&self, request: &mut Request) -> Result<(), ApiError> {
        let value = match self.store.get(ACCESS_TOKEN_KEY)? {
            Some(token) if !token.is_empty() => {
                HeaderValue::from_str(&format!("Bearer {token}"))?
            }
            _ => HeaderValue::from_static(""),
        };

        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}

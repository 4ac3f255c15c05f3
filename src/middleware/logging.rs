//! Logging middleware
//!
//! Logs outgoing requests and their outcomes. Header values are never logged;
//! only whether a credential was attached.

use log::{debug, info, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Request, StatusCode, Url};

/// Log an outgoing request
pub fn log_request(request: &Request) {
    let authenticated = request
        .headers()
        .get(AUTHORIZATION)
        .is_some_and(|value| !value.is_empty());

    info!("{} {}", request.method(), request.url());
    debug!("Bearer credential attached: {}", authenticated);
}

/// Log a received response
pub fn log_response(method: &Method, url: &Url, status: StatusCode) {
    if status.is_success() {
        info!("{} {} -> {}", method, url, status);
    } else {
        warn!("{} {} -> {}", method, url, status);
    }
}

/// Log a request that never produced a response
pub fn log_failure(method: &Method, url: &Url, error: &reqwest::Error) {
    warn!("{} {} failed: {}", method, url, error);
}

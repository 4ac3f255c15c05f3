//! Authenticated request client
//!
//! Every backend call goes through one shared `ApiClient`, which resolves
//! paths against the configured origin and runs its interceptors on each
//! request before it is sent.

pub mod client;
pub mod interceptor;

pub use client::ApiClient;
pub use interceptor::{BearerAuth, RequestInterceptor};

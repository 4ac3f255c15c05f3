//! Login flow
//!
//! Exchanges a username and password for a token pair and keeps the pair in
//! the credential store for the request client to pick up.

pub mod operations;
pub mod results;

pub use operations::{LOGIN_PATH, login, logout, request_tokens};
pub use results::{LoginOutcome, LoginRequest, LoginResponse};

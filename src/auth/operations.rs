//! Authentication operations

use log::{error, info, warn};

use super::results::{LoginOutcome, LoginRequest, LoginResponse};
use crate::api::ApiClient;
use crate::credentials::{Credential, CredentialStore};
use crate::error::handlers::is_rejected_by_server;
use crate::error::{AuthError, StoreError};

/// Endpoint exchanging credentials for tokens.
pub const LOGIN_PATH: &str = "/auth/login";

/// Posts the credentials and stores the returned token pair.
pub async fn request_tokens(
    client: &ApiClient,
    store: &dyn CredentialStore,
    username: &str,
    password: &str,
) -> Result<Credential, AuthError> {
    let body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response: LoginResponse = client.post_json(LOGIN_PATH, &body).await?;
    let credential = Credential::from(response);
    credential.save(store)?;
    Ok(credential)
}

/// Logs in and reports only success or a generic failure; the cause goes to
/// the log.
pub async fn login(
    client: &ApiClient,
    store: &dyn CredentialStore,
    username: &str,
    password: &str,
) -> LoginOutcome {
    match request_tokens(client, store, username, password).await {
        Ok(_) => {
            info!("Logged in as {}", username);
            LoginOutcome::Success
        }
        Err(e) if is_rejected_by_server(&e) => {
            warn!("Login rejected for {}: {}", username, e);
            LoginOutcome::Failed
        }
        Err(e) => {
            error!("Login for {} failed: {}", username, e);
            LoginOutcome::Failed
        }
    }
}

/// Forgets both stored tokens.
pub fn logout(store: &dyn CredentialStore) -> Result<(), StoreError> {
    Credential::clear(store)?;
    info!("Logged out");
    Ok(())
}

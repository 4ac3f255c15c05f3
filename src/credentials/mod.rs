//! Credential storage
//!
//! Tokens live in a key-value string store injected into every component
//! that needs them. The login flow writes, the request interceptor reads.

pub mod file;
pub mod store;

pub use file::FileStore;
pub use store::{CredentialStore, MemoryStore};

use log::warn;

use crate::error::StoreError;

/// Store key of the bearer token attached to outgoing requests.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Store key of the refresh token. Written at login, never read back.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Token pair issued by the backend at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub access_token: String,
    pub refresh_token: String,
}

impl Credential {
    /// Writes both tokens to the store. If the second write fails the access
    /// token is removed again, so a failed save never leaves a usable bearer
    /// credential behind.
    pub fn save(&self, store: &dyn CredentialStore) -> Result<(), StoreError> {
        store.set(ACCESS_TOKEN_KEY, &self.access_token)?;

        if let Err(e) = store.set(REFRESH_TOKEN_KEY, &self.refresh_token) {
            if let Err(cleanup) = store.remove(ACCESS_TOKEN_KEY) {
                warn!("Could not roll back access token: {}", cleanup);
            }
            return Err(e);
        }

        Ok(())
    }

    /// Reads the token pair back. Returns `None` unless both are present.
    pub fn load(store: &dyn CredentialStore) -> Result<Option<Self>, StoreError> {
        let access_token = store.get(ACCESS_TOKEN_KEY)?;
        let refresh_token = store.get(REFRESH_TOKEN_KEY)?;

        Ok(access_token
            .zip(refresh_token)
            .map(|(access_token, refresh_token)| Self {
                access_token,
                refresh_token,
            }))
    }

    /// Removes both tokens from the store.
    pub fn clear(store: &dyn CredentialStore) -> Result<(), StoreError> {
        store.remove(ACCESS_TOKEN_KEY)?;
        store.remove(REFRESH_TOKEN_KEY)
    }
}

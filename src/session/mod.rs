//! Persisted session: bearer credential plus identity.
//!
//! The session is created at app start from a [`KeyValueStore`] and passed
//! explicitly to everything that needs it. Every write replaces a whole value,
//! so concurrent screens never contend on partial updates.
//!
//! Store failures while saving a sign-in are returned to the caller. Other
//! writes (subscription URL, language, clearing) are logged and dropped.

mod secure;
mod store;

use std::sync::Arc;

pub use secure::SecureString;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

const KEY_AUTH_DATA: &str = "auth_data";
const KEY_TOKEN: &str = "token";
const KEY_USER_EMAIL: &str = "user_email";
const KEY_SUBSCRIBE_URL: &str = "subscribe_url";
const KEY_LANGUAGE: &str = "language";

#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
}

impl Session {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Session backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Credential sent verbatim as the `Authorization` header.
    pub fn auth_data(&self) -> SecureString {
        SecureString::new(self.read(KEY_AUTH_DATA))
    }

    pub fn token(&self) -> SecureString {
        SecureString::new(self.read(KEY_TOKEN))
    }

    pub fn user_email(&self) -> String {
        self.read(KEY_USER_EMAIL)
    }

    pub fn subscribe_url(&self) -> String {
        self.read(KEY_SUBSCRIBE_URL)
    }

    /// Preferred UI language code, blank means follow the system.
    pub fn language(&self) -> String {
        self.read(KEY_LANGUAGE)
    }

    pub fn is_logged_in(&self) -> bool {
        !self.auth_data().is_blank()
    }

    /// Persist a fresh sign-in. Unlike the other setters this reports store
    /// failures, since a credential that is not on disk is lost on restart.
    pub fn store_credentials(
        &self,
        auth_data: &str,
        token: &str,
        email: &str,
    ) -> Result<(), StoreError> {
        self.store.set(KEY_AUTH_DATA, auth_data)?;
        self.store.set(KEY_TOKEN, token)?;
        self.store.set(KEY_USER_EMAIL, email)?;
        tracing::info!(email, "Session credentials stored");
        Ok(())
    }

    pub fn set_subscribe_url(&self, url: &str) {
        self.write(KEY_SUBSCRIBE_URL, url);
    }

    pub fn set_language(&self, code: &str) {
        self.write(KEY_LANGUAGE, code);
    }

    /// Drop credentials and cached subscription. The language preference
    /// outlives the session.
    pub fn clear(&self) {
        for key in [KEY_AUTH_DATA, KEY_TOKEN, KEY_USER_EMAIL, KEY_SUBSCRIBE_URL] {
            self.write(key, "");
        }
        tracing::info!("Session cleared");
    }

    fn read(&self, key: &str) -> String {
        self.store.get(key).unwrap_or_default()
    }

    /// Best effort: the value stays readable in memory for this process.
    fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            tracing::warn!(key, error = %err, "Failed to persist session value");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.is_logged_in())
            .field("user_email", &self.user_email())
            .finish()
    }
}

use std::sync::Arc;

use api::{LoginOutcome, VitaApi};
use vita_core::model::AuthSession;

use crate::error::AuthError;
use crate::session_store::SessionStore;

/// Registration, login, and session lifecycle.
#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn VitaApi>,
    store: Arc<dyn SessionStore>,
}

impl AuthService {
    #[must_use]
    pub fn new(api: Arc<dyn VitaApi>, store: Arc<dyn SessionStore>) -> Self {
        Self { api, store }
    }

    /// Create an account. The password/confirmation check happens locally:
    /// a mismatch fails before any request is issued.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordMismatch` on mismatched passwords, or
    /// `AuthError::Api` when the server rejects the registration.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Option<String>, AuthError> {
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        let message = self.api.register(name, email, password).await?;
        Ok(message)
    }

    /// Log in and persist the resulting session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Api` for rejected credentials and
    /// `AuthError::SessionStore` when the session cannot be persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let outcome = self.api.login(email, password).await?;
        self.store
            .save(&outcome.session)
            .map_err(AuthError::SessionStore)?;
        Ok(outcome)
    }

    /// The session persisted from a previous run, if any.
    #[must_use]
    pub fn restore_session(&self) -> Option<AuthSession> {
        self.store.load()
    }

    /// Destroy the persisted session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` when the stored session cannot be
    /// removed.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.clear().map_err(AuthError::SessionStore)
    }
}

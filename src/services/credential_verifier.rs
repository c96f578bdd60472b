//! Credential verifier - decides whether a submitted username/password
//! pair matches a stored user record.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::config::DUMMY_PASSWORD;
use crate::domain::{Credentials, Password, VerificationOutcome};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Hash verified when the username is unknown, so both paths cost one
/// Argon2 verification.
static DUMMY_HASH: Lazy<Option<Password>> = Lazy::new(|| match Password::hash(DUMMY_PASSWORD) {
    Ok(password) => Some(password),
    Err(e) => {
        tracing::warn!("Could not prepare dummy password hash: {}", e);
        None
    }
});

/// Credential verification trait for dependency injection.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify a credential pair.
    ///
    /// Unknown users and wrong passwords are `Ok(Failure)`; `Err` only
    /// reports that the user store could not be consulted.
    async fn verify(&self, credentials: Credentials) -> AppResult<VerificationOutcome>;
}

/// Concrete verifier backed by a [`UserRepository`].
pub struct Verifier {
    users: Arc<dyn UserRepository>,
}

impl Verifier {
    /// Create a verifier reading from the given user store
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Build the unknown-user hash ahead of the first request.
    ///
    /// Hashing is CPU-bound; call from a blocking context.
    pub fn prepare() -> bool {
        DUMMY_HASH.is_some()
    }
}

#[async_trait]
impl CredentialVerifier for Verifier {
    async fn verify(&self, credentials: Credentials) -> AppResult<VerificationOutcome> {
        let Credentials { username, password } = credentials;

        let stored = self
            .users
            .find_by_username(&username)
            .await?
            .map(|user| user.password);

        // Argon2 is CPU-bound, including the first dummy hash; keep it off the async workers
        let password_valid = tokio::task::spawn_blocking(move || match stored {
            Some(stored) => stored.verify(&password),
            None => {
                if let Some(dummy) = DUMMY_HASH.as_ref() {
                    dummy.verify(&password);
                }
                false
            }
        })
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))?;

        let outcome = VerificationOutcome::from(password_valid);
        tracing::debug!(%username, %outcome, "Credential verification finished");

        Ok(outcome)
    }
}

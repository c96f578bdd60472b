//! Application state - explicit dependency wiring.
//!
//! The verifier receives its user store through its constructor; nothing is
//! looked up from an ambient registry.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, UserRepository, UserStore};
use crate::services::{CredentialVerifier, Verifier};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Credential verification use case
    pub verifier: Arc<dyn CredentialVerifier>,
    /// User store, also pinged by the health endpoint
    pub users: Arc<dyn UserRepository>,
    /// Browser origins allowed by the CORS layer
    pub allowed_origins: Arc<[String]>,
}

impl AppState {
    /// Build state on top of a connected database.
    pub fn from_database(database: &Database, config: &Config) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(database.get_connection()));
        Self::new(users, &config.cors_allowed_origins)
    }

    /// Build state around any user store implementation.
    pub fn new(users: Arc<dyn UserRepository>, allowed_origins: &[String]) -> Self {
        Self {
            verifier: Arc::new(Verifier::new(users.clone())),
            users,
            allowed_origins: allowed_origins.into(),
        }
    }

    /// Replace the verifier (tests, alternative policies).
    pub fn with_verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = verifier;
        self
    }
}

//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure. They depend on
//! repository traits, never on a concrete store.

mod credential_verifier;

pub use credential_verifier::{CredentialVerifier, Verifier};

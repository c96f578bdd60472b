//! Domain layer - Core business entities and logic
//!
//! Contains the user record, its password value object, and the
//! credential/outcome pair exchanged with the verifier. No transport or
//! persistence types appear here.

pub mod credentials;
pub mod password;
pub mod user;

pub use credentials::{Credentials, VerificationOutcome};
pub use password::Password;
pub use user::User;

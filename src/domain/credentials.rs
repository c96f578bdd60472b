//! Submitted credentials and the outcome of verifying them.

use crate::config::{MESSAGE_INVALID_CREDENTIALS, MESSAGE_LOGIN_SUCCESSFUL};

/// Username/password pair as submitted by a client.
///
/// Both values are opaque; nothing about their length or alphabet is checked.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Never print the submitted password
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Result of a single verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Success,
    Failure,
}

impl VerificationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, VerificationOutcome::Success)
    }

    /// Fixed client-facing message for this outcome
    pub fn message(&self) -> &'static str {
        match self {
            VerificationOutcome::Success => MESSAGE_LOGIN_SUCCESSFUL,
            VerificationOutcome::Failure => MESSAGE_INVALID_CREDENTIALS,
        }
    }
}

impl From<bool> for VerificationOutcome {
    fn from(matched: bool) -> Self {
        if matched {
            VerificationOutcome::Success
        } else {
            VerificationOutcome::Failure
        }
    }
}

impl std::fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationOutcome::Success => write!(f, "success"),
            VerificationOutcome::Failure => write!(f, "failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        assert_eq!(VerificationOutcome::Success.message(), "Login successful");
        assert_eq!(VerificationOutcome::Failure.message(), "Invalid credentials");
    }

    #[test]
    fn test_outcome_from_bool() {
        assert!(VerificationOutcome::from(true).is_success());
        assert!(!VerificationOutcome::from(false).is_success());
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("alice", "secret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret"));
    }
}

//! User domain entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Password;

/// User domain entity.
///
/// Created and changed by user management; the login flow only reads it.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: Password,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record with a fresh identifier
    pub fn new(username: String, password: Password) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            password,
            created_at: now,
            updated_at: now,
        }
    }
}

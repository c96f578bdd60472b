//! Shared test fixtures.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use login_service::domain::{Password, User};
use login_service::errors::{AppError, AppResult};
use login_service::infra::UserRepository;

/// In-memory user store that counts lookups and can simulate an outage.
#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<HashMap<String, User>>,
    lookups: AtomicUsize,
    unavailable: bool,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails like a dropped connection
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Add a user whose password is hashed the same way production does
    pub fn with_user(self, username: &str, password: &str) -> Self {
        let user = User::new(
            username.to_string(),
            Password::hash(password).expect("hashing should succeed"),
        );
        self.users
            .lock()
            .unwrap()
            .insert(username.to_string(), user);
        self
    }

    /// Number of `find_by_username` calls so far
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> AppResult<()> {
        if self.unavailable {
            return Err(AppError::from(sea_orm::DbErr::Custom(
                "connection refused".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.users.lock().unwrap().get(username).cloned())
    }

    async fn create(&self, username: String, password: Password) -> AppResult<User> {
        self.check_available()?;
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&username) {
            return Err(AppError::conflict("User"));
        }
        let user = User::new(username.clone(), password);
        users.insert(username, user.clone());
        Ok(user)
    }

    async fn ping(&self) -> AppResult<()> {
        self.check_available()
    }
}

//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - User repository (the persisted user store)

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(test)]
pub use repositories::MockUserRepository;

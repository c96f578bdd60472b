//! Login Service - credential verification over HTTP
//!
//! Accepts a username/password pair on `POST /api/login` and checks it
//! against a persisted user store. Stored passwords are Argon2id hashes.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User record, password value object, verification outcome
//! - **services**: Credential verifier
//! - **infra**: Database, migrations, user repository
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create a user
//! LOGIN_USER_PASSWORD=secret cargo run -- user add alice
//!
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Credentials, Password, User, VerificationOutcome};
pub use errors::{AppError, AppResult};

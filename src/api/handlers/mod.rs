//! HTTP request handlers.

pub mod health_handler;
pub mod login_handler;

pub use health_handler::health;
pub use login_handler::login_routes;

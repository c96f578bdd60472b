//! CORS layer built from the configured origin allow-list.

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CORS_MAX_AGE_SECONDS;

/// Build the CORS layer for the login API.
///
/// An empty list grants no cross-origin access. `*` allows any origin, but
/// only when it is configured literally.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(CORS_MAX_AGE_SECONDS));

    if allowed_origins.iter().any(|origin| origin == "*") {
        tracing::warn!("CORS allows any origin");
        return base.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return base;
    }

    base.allow_origin(AllowOrigin::list(origins))
}

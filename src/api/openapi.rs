//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::login_handler;
use crate::types::MessageResponse;

/// OpenAPI documentation for the login service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Login Service",
        version = "0.1.0",
        description = "Verifies a username/password pair against the user store",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(login_handler::login),
    components(schemas(login_handler::LoginRequest, MessageResponse)),
    tags(
        (name = "Authentication", description = "Credential verification")
    )
)]
pub struct ApiDoc;

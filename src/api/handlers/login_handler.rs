//! Login handler - the credential verification endpoint.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::LOGIN_PATH;
use crate::domain::{Credentials, VerificationOutcome};
use crate::errors::{AppError, AppResult};
use crate::types::MessageResponse;

/// Login request body.
///
/// Fields are optional on the wire so a missing or `null` field is reported
/// as a validation error instead of reaching the verifier.
#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Account name
    #[validate(required(message = "username is required"))]
    #[schema(example = "alice", value_type = String)]
    pub username: Option<String>,
    /// Plain text password
    #[validate(required(message = "password is required"))]
    #[schema(example = "secret", value_type = String)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Convert a validated request into domain credentials.
    pub fn into_credentials(self) -> AppResult<Credentials> {
        match (self.username, self.password) {
            (Some(username), Some(password)) => Ok(Credentials::new(username, password)),
            _ => Err(AppError::validation("username and password are required")),
        }
    }
}

/// Create login routes
pub fn login_routes() -> Router<AppState> {
    Router::new().route(LOGIN_PATH, post(login))
}

/// Verify a username/password pair
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = MessageResponse),
        (status = 400, description = "Missing field or malformed body"),
        (status = 401, description = "Invalid credentials", body = MessageResponse),
        (status = 500, description = "User store unavailable")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let credentials = payload.into_credentials()?;
    let outcome = state.verifier.verify(credentials).await?;

    Ok(outcome_response(outcome))
}

/// Map a verification outcome to its status and fixed message
fn outcome_response(outcome: VerificationOutcome) -> (StatusCode, Json<MessageResponse>) {
    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };

    (status, Json(MessageResponse::new(outcome.message())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_response_status() {
        let (status, Json(body)) = outcome_response(VerificationOutcome::Success);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, "Login successful");

        let (status, Json(body)) = outcome_response(VerificationOutcome::Failure);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.message, "Invalid credentials");
    }

    #[test]
    fn test_missing_field_fails_validation() {
        let request: LoginRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_null_field_fails_validation() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"username":null,"password":"x"}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_strings_pass_presence_check() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"username":"","password":""}"#).unwrap();
        assert!(request.validate().is_ok());

        let credentials = request.into_credentials().unwrap();
        assert_eq!(credentials.username, "");
        assert_eq!(credentials.password, "");
    }
}

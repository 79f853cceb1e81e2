//! Authentication handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::TokenResponse;

/// Staff credentials, shared by signup and signin
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CredentialsRequest {
    /// Staff email address
    #[validate(email(message = "email must be an email"))]
    #[schema(example = "frontdesk@clinic.example")]
    pub email: String,
    /// Password, 8 to 20 characters
    #[validate(length(
        min = 8,
        max = 20,
        message = "password must be between 8 and 20 characters"
    ))]
    #[schema(example = "s3cretpass", min_length = 8, max_length = 20)]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

/// Register a staff account
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "Authentication",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .auth_service
        .signup(payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Sign in and get a JWT
#[utoipa::path(
    post,
    path = "/auth/signin",
    tag = "Authentication",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Signed in", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CredentialsRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .signin(payload.email, payload.password)
        .await?;

    Ok(Json(token))
}

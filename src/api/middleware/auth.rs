//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::errors::AppError;

/// Staff member extracted from a verified token
#[derive(Clone, Debug)]
pub struct CurrentStaff {
    pub id: Uuid,
    pub email: String,
}

/// JWT authentication middleware.
///
/// Rejects the request with 401 unless it carries a valid
/// `Authorization: Bearer <token>` header, then injects [`CurrentStaff`]
/// into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(bearer.token())?;

    request.extensions_mut().insert(CurrentStaff {
        id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

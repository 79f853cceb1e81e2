//! Doctor roster handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::Doctor;
use crate::errors::AppResult;

pub fn doctor_routes() -> Router<AppState> {
    Router::new().route("/", get(list_doctors))
}

/// List doctors ordered by id
#[utoipa::path(
    get,
    path = "/doctors",
    tag = "Doctors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All doctors", body = Vec<Doctor>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_doctors(State(state): State<AppState>) -> AppResult<Json<Vec<Doctor>>> {
    Ok(Json(state.doctor_service.find_all().await?))
}

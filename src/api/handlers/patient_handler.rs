//! Patient queue handlers.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{PathParam, ValidatedJson};
use crate::api::middleware::CurrentStaff;
use crate::api::AppState;
use crate::domain::{NewPatient, Patient, PatientPriority, PatientStatus, PatientStatusChange};
use crate::errors::AppResult;

/// Walk-in registration
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePatientRequest {
    #[validate(length(min = 1, message = "name should not be empty"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    pub priority: PatientPriority,
}

/// Queue status change. Omitting `attendingDoctorId` clears the assignment.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatientStatusRequest {
    pub status: PatientStatus,
    #[schema(example = 1)]
    pub attending_doctor_id: Option<i32>,
}

pub fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_patients).post(create_patient))
        .route("/:id/status", patch(update_patient_status))
}

/// List the queue, earliest arrival first
#[utoipa::path(
    get,
    path = "/patients",
    tag = "Patients",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All patients", body = Vec<Patient>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_patients(State(state): State<AppState>) -> AppResult<Json<Vec<Patient>>> {
    Ok(Json(state.patient_service.find_all().await?))
}

/// Add a walk-in patient to the queue
#[utoipa::path(
    post,
    path = "/patients",
    tag = "Patients",
    security(("bearer_auth" = [])),
    request_body = CreatePatientRequest,
    responses(
        (status = 201, description = "Patient queued", body = Patient),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_patient(
    Extension(staff): Extension<CurrentStaff>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePatientRequest>,
) -> AppResult<(StatusCode, Json<Patient>)> {
    tracing::debug!(staff = %staff.email, "Registering walk-in patient");

    let patient = state
        .patient_service
        .create(NewPatient {
            name: payload.name,
            priority: payload.priority,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(patient)))
}

/// Change a patient's queue status
#[utoipa::path(
    patch,
    path = "/patients/{id}/status",
    tag = "Patients",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Patient ID")
    ),
    request_body = UpdatePatientStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = Patient),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Patient not found")
    )
)]
pub async fn update_patient_status(
    Extension(staff): Extension<CurrentStaff>,
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    ValidatedJson(payload): ValidatedJson<UpdatePatientStatusRequest>,
) -> AppResult<Json<Patient>> {
    tracing::debug!(staff = %staff.email, patient_id = id, "Changing patient status");

    let patient = state
        .patient_service
        .update_status(
            id,
            PatientStatusChange {
                status: payload.status,
                attending_doctor_id: payload.attending_doctor_id,
            },
        )
        .await?;

    Ok(Json(patient))
}

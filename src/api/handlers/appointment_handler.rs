//! Appointment handlers.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{PathParam, ValidatedJson};
use crate::api::middleware::CurrentStaff;
use crate::api::AppState;
use crate::domain::appointment::{deserialize_optional_time, deserialize_time};
use crate::domain::{Appointment, AppointmentChanges, NewAppointment};
use crate::errors::AppResult;

/// Booking request. A `status` field, if sent, is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    #[validate(length(min = 1, message = "patientName should not be empty"))]
    #[schema(example = "John Roe")]
    pub patient_name: String,
    #[schema(example = "Follow-up")]
    pub reason: String,
    /// ISO 8601 date string; values without an offset are read as UTC
    #[serde(deserialize_with = "deserialize_time")]
    #[schema(value_type = String, example = "2024-05-01T09:30")]
    pub time: DateTime<Utc>,
    #[schema(example = 1)]
    pub doctor_id: i32,
}

/// Reschedule request; every field is optional
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    #[validate(length(min = 1, message = "patientName should not be empty"))]
    pub patient_name: Option<String>,
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_time")]
    #[schema(value_type = Option<String>, example = "2024-05-02T14:00")]
    pub time: Option<DateTime<Utc>>,
    pub doctor_id: Option<i32>,
}

impl From<UpdateAppointmentRequest> for AppointmentChanges {
    fn from(req: UpdateAppointmentRequest) -> Self {
        Self {
            patient_name: req.patient_name,
            reason: req.reason,
            time: req.time,
            doctor_id: req.doctor_id,
        }
    }
}

pub fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_appointments).post(create_appointment))
        .route("/:id", patch(update_appointment).delete(cancel_appointment))
}

/// List appointments ordered by time, canceled ones included
#[utoipa::path(
    get,
    path = "/appointments",
    tag = "Appointments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All appointments", body = Vec<Appointment>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_appointments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Appointment>>> {
    Ok(Json(state.appointment_service.find_all().await?))
}

/// Book an appointment (always Confirmed)
#[utoipa::path(
    post,
    path = "/appointments",
    tag = "Appointments",
    security(("bearer_auth" = [])),
    request_body = CreateAppointmentRequest,
    responses(
        (status = 201, description = "Appointment booked", body = Appointment),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_appointment(
    Extension(staff): Extension<CurrentStaff>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAppointmentRequest>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    tracing::debug!(staff = %staff.email, "Booking appointment");

    let appointment = state
        .appointment_service
        .create(NewAppointment {
            patient_name: payload.patient_name,
            reason: payload.reason,
            time: payload.time,
            doctor_id: payload.doctor_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Reschedule or edit an appointment
#[utoipa::path(
    patch,
    path = "/appointments/{id}",
    tag = "Appointments",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    request_body = UpdateAppointmentRequest,
    responses(
        (status = 200, description = "Appointment updated", body = Appointment),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn update_appointment(
    Extension(staff): Extension<CurrentStaff>,
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAppointmentRequest>,
) -> AppResult<Json<Appointment>> {
    tracing::debug!(staff = %staff.email, appointment_id = id, "Updating appointment");

    let appointment = state
        .appointment_service
        .update(id, payload.into())
        .await?;

    Ok(Json(appointment))
}

/// Cancel an appointment. The record stays, with status Canceled.
#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    tag = "Appointments",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 204, description = "Appointment canceled"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn cancel_appointment(
    Extension(staff): Extension<CurrentStaff>,
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<StatusCode> {
    tracing::debug!(staff = %staff.email, appointment_id = id, "Canceling appointment");

    state.appointment_service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_request_ignores_status_and_accepts_local_time() {
        let req: CreateAppointmentRequest = serde_json::from_str(
            r#"{"patientName":"John Roe","reason":"Checkup","time":"2024-05-01T09:30","doctorId":2,"status":"Pending"}"#,
        )
        .unwrap();

        assert_eq!(req.time, Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap());
        assert_eq!(req.doctor_id, 2);
    }

    #[test]
    fn test_update_request_fields_are_optional() {
        let req: UpdateAppointmentRequest = serde_json::from_str(r#"{"reason":"Lab results"}"#).unwrap();
        let changes = AppointmentChanges::from(req);

        assert_eq!(changes.reason.as_deref(), Some("Lab results"));
        assert!(changes.patient_name.is_none());
        assert!(changes.time.is_none());
        assert!(changes.doctor_id.is_none());
    }

    #[test]
    fn test_update_request_rejects_bad_time() {
        let result = serde_json::from_str::<UpdateAppointmentRequest>(r#"{"time":"next week"}"#);
        assert!(result.is_err());
    }
}

//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    appointment_handler, auth_handler, doctor_handler, health_handler, patient_handler,
};
use crate::domain::{
    Appointment, AppointmentStatus, Doctor, Patient, PatientPriority, PatientStatus, UserResponse,
};
use crate::errors::{ErrorResponse, FieldError};
use crate::services::TokenResponse;

/// OpenAPI documentation for the front-desk API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clinic Front Desk API",
        version = "0.1.0",
        description = "Patient queue, appointment scheduling and staff authentication for a clinic front desk",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    paths(
        health_handler::health,
        // Authentication endpoints
        auth_handler::signup,
        auth_handler::signin,
        // Patient queue
        patient_handler::list_patients,
        patient_handler::create_patient,
        patient_handler::update_patient_status,
        // Doctors
        doctor_handler::list_doctors,
        // Appointments
        appointment_handler::list_appointments,
        appointment_handler::create_appointment,
        appointment_handler::update_appointment,
        appointment_handler::cancel_appointment,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            Patient,
            PatientStatus,
            PatientPriority,
            Doctor,
            Appointment,
            AppointmentStatus,
            // Request types
            auth_handler::CredentialsRequest,
            patient_handler::CreatePatientRequest,
            patient_handler::UpdatePatientStatusRequest,
            appointment_handler::CreateAppointmentRequest,
            appointment_handler::UpdateAppointmentRequest,
            // Response types
            TokenResponse,
            ErrorResponse,
            FieldError,
            health_handler::HealthResponse,
            health_handler::ServiceHealth,
            health_handler::ServiceStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Authentication", description = "Staff signup and signin"),
        (name = "Patients", description = "Walk-in patient queue"),
        (name = "Doctors", description = "Doctor roster"),
        (name = "Appointments", description = "Appointment scheduling")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT obtained from /auth/signin"))
                        .build(),
                ),
            );
        }
    }
}

//! Integration tests for API endpoints.
//!
//! Each test drives the real router against a fresh in-memory SQLite
//! database with all migrations applied and the doctor roster seeded.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::ConnectOptions;
use serde_json::{json, Value};
use tower::ServiceExt;

use frontdesk::api::{create_router, AppState};
use frontdesk::config::Config;
use frontdesk::infra::Database;

// =============================================================================
// Harness
// =============================================================================

struct TestApp {
    router: Router,
    state: AppState,
}

impl TestApp {
    async fn spawn() -> Self {
        let mut options = ConnectOptions::new("sqlite::memory:");
        // One connection, otherwise every pooled connection sees its own empty database
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let database = Arc::new(Database::connect_with(options).await.unwrap());
        let state = AppState::from_config(database, Config::default());
        state.doctor_service.seed_defaults().await.unwrap();

        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }

    async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Some(token), None).await
    }

    async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    async fn patch(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(token), Some(body)).await
    }

    /// Sign up a staff account and return a bearer token for it
    async fn staff_token(&self) -> String {
        let credentials = json!({ "email": "desk@clinic.example", "password": "s3cretpass" });
        let (status, _) = self.post("/auth/signup", None, credentials.clone()).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self.post("/auth/signin", None, credentials).await;
        assert_eq!(status, StatusCode::OK);
        body["accessToken"].as_str().unwrap().to_string()
    }

    async fn book(&self, token: &str, patient_name: &str, time: &str) -> Value {
        let (status, body) = self
            .post(
                "/appointments",
                Some(token),
                json!({
                    "patientName": patient_name,
                    "reason": "Checkup",
                    "time": time,
                    "doctorId": 1
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body
    }
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn test_signup_signin_and_queue_walk_in() {
    let app = TestApp::spawn().await;

    let (status, user) = app
        .post(
            "/auth/signup",
            None,
            json!({ "email": "jane.desk@clinic.example", "password": "password123" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["email"], "jane.desk@clinic.example");
    assert!(user["id"].is_string());
    assert!(user["createdAt"].is_string());
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("password_hash").is_none());

    let (status, token) = app
        .post(
            "/auth/signin",
            None,
            json!({ "email": "jane.desk@clinic.example", "password": "password123" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(token["tokenType"], "Bearer");
    assert_eq!(token["expiresIn"], 86400);
    let token = token["accessToken"].as_str().unwrap();

    let (status, created) = app
        .post(
            "/patients",
            Some(token),
            json!({ "name": "Jane Doe", "priority": "Urgent" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["queueNumber"], "A101");
    assert!(created["attendingDoctorId"].is_null());

    let (status, patients) = app.get("/patients", token).await;
    assert_eq!(status, StatusCode::OK);
    let patients = patients.as_array().unwrap();
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0]["name"], "Jane Doe");
    assert_eq!(patients[0]["status"], "Waiting");
    assert_eq!(patients[0]["priority"], "Urgent");
    assert_eq!(patients[0]["queueNumber"], "A101");
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let app = TestApp::spawn().await;
    let credentials = json!({ "email": "desk@clinic.example", "password": "s3cretpass" });

    let (status, _) = app.post("/auth/signup", None, credentials.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.post("/auth/signup", None, credentials).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["statusCode"], 409);
    assert_eq!(body["error"], "CONFLICT");
    assert_eq!(body["message"], "Email already exists");
}

#[tokio::test]
async fn test_signup_validates_email_and_password_length() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .post(
            "/auth/signup",
            None,
            json!({ "email": "not-an-email", "password": "short" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, ["email", "password"]);

    let (status, _) = app
        .post(
            "/auth/signup",
            None,
            json!({ "email": "desk@clinic.example", "password": "way-too-long-password-123" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signin_rejects_bad_credentials() {
    let app = TestApp::spawn().await;
    app.staff_token().await;

    let (status, body) = app
        .post(
            "/auth/signin",
            None,
            json!({ "email": "desk@clinic.example", "password": "wrongpass1" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let (status, _) = app
        .post(
            "/auth/signin",
            None,
            json!({ "email": "nobody@clinic.example", "password": "s3cretpass" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_routes_require_valid_token() {
    let app = TestApp::spawn().await;

    for uri in ["/patients", "/doctors", "/appointments"] {
        let (status, body) = app.request(Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} without token", uri);
        assert_eq!(body["statusCode"], 401);

        let (status, _) = app.get(uri, "garbage.token.value").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} with garbage token", uri);
    }

    let (status, _) = app
        .request(Method::DELETE, "/appointments/1", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Patients
// =============================================================================

#[tokio::test]
async fn test_queue_numbers_follow_creation_order() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    for name in ["First", "Second", "Third"] {
        let (status, _) = app
            .post(
                "/patients",
                Some(&token),
                json!({ "name": name, "priority": "Normal" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, patients) = app.get("/patients", &token).await;
    let listed: Vec<(&str, &str)> = patients
        .as_array()
        .unwrap()
        .iter()
        .map(|p| (p["name"].as_str().unwrap(), p["queueNumber"].as_str().unwrap()))
        .collect();
    assert_eq!(
        listed,
        [("First", "A101"), ("Second", "A102"), ("Third", "A103")]
    );
}

#[tokio::test]
async fn test_create_patient_validation() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let (status, body) = app
        .post(
            "/patients",
            Some(&token),
            json!({ "name": "", "priority": "Normal" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"][0]["field"], "name");

    let (status, _) = app
        .post(
            "/patients",
            Some(&token),
            json!({ "name": "Sam", "priority": "Low" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post("/patients", Some(&token), json!({ "name": "Sam" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_patient_reports_undecodable_fields() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let (status, body) = app
        .post("/patients", Some(&token), json!({ "name": "Sam" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["fields"][0]["field"], "priority");
    assert_eq!(body["message"], "priority is required");

    let (status, body) = app
        .post(
            "/patients",
            Some(&token),
            json!({ "name": "Sam", "priority": "High" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"][0]["field"], "priority");
}

#[tokio::test]
async fn test_patient_status_has_no_transition_guard() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let (_, patient) = app
        .post(
            "/patients",
            Some(&token),
            json!({ "name": "Sam", "priority": "Normal" }),
        )
        .await;
    let uri = format!("/patients/{}/status", patient["id"]);

    let (status, updated) = app
        .patch(
            &uri,
            &token,
            json!({ "status": "With Doctor", "attendingDoctorId": 2 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "With Doctor");
    assert_eq!(updated["attendingDoctorId"], 2);

    let (_, updated) = app
        .patch(&uri, &token, json!({ "status": "Completed" }))
        .await;
    assert_eq!(updated["status"], "Completed");
    assert!(updated["attendingDoctorId"].is_null());

    let (status, updated) = app
        .patch(&uri, &token, json!({ "status": "Waiting" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "Waiting");
}

#[tokio::test]
async fn test_patient_status_unknown_id_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let (status, body) = app
        .patch("/patients/999/status", &token, json!({ "status": "Completed" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Patient with ID \"999\" not found");

    let (status, _) = app
        .patch("/patients/1/status", &token, json!({ "status": "Gone" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Doctors
// =============================================================================

#[tokio::test]
async fn test_doctor_seeding_is_idempotent() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    assert_eq!(app.state.doctor_service.seed_defaults().await.unwrap(), 0);

    let (status, doctors) = app.get("/doctors", &token).await;
    assert_eq!(status, StatusCode::OK);
    let doctors = doctors.as_array().unwrap();
    assert_eq!(doctors.len(), 3);
    assert_eq!(doctors[0]["id"], 1);
    assert_eq!(doctors[0]["name"], "Dr. Smith");
    assert_eq!(doctors[0]["specialization"], "General Practice");
    assert_eq!(doctors[2]["name"], "Dr. Lee");
}

// =============================================================================
// Appointments
// =============================================================================

#[tokio::test]
async fn test_create_appointment_forces_confirmed() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let (status, appointment) = app
        .post(
            "/appointments",
            Some(&token),
            json!({
                "patientName": "John Roe",
                "reason": "Follow-up",
                "time": "2024-05-01T09:30",
                "doctorId": 2,
                "status": "Pending"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(appointment["status"], "Confirmed");
    assert_eq!(appointment["doctorId"], 2);
    assert_eq!(appointment["time"], "2024-05-01T09:30:00Z");

    let patient_id = appointment["patientId"].as_str().unwrap();
    let n: u32 = patient_id.strip_prefix('P').unwrap().parse().unwrap();
    assert!(n < 1000);
}

#[tokio::test]
async fn test_create_appointment_rejects_bad_time() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let (status, body) = app
        .post(
            "/appointments",
            Some(&token),
            json!({
                "patientName": "John Roe",
                "reason": "Follow-up",
                "time": "tomorrow morning",
                "doctorId": 1
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_appointment_accepts_iso_date_strings() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let cases = [
        ("2024-05-01", "2024-05-01T00:00:00Z"),
        ("2024-05-01T09:30Z", "2024-05-01T09:30:00Z"),
        ("2024-05-01T09:30+02:00", "2024-05-01T07:30:00Z"),
        ("2024-05-01 09:30", "2024-05-01T09:30:00Z"),
    ];
    for (sent, stored) in cases {
        let booked = app.book(&token, "John Roe", sent).await;
        assert_eq!(booked["time"], stored, "sent {}", sent);
    }
}

#[tokio::test]
async fn test_non_numeric_ids_get_json_errors() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let (status, body) = app
        .patch("/appointments/abc", &token, json!({ "reason": "Lab results" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["message"].is_string());

    let (status, body) = app
        .request(Method::DELETE, "/appointments/99999999999", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let (status, body) = app
        .patch("/patients/abc/status", &token, json!({ "status": "Completed" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_appointments_are_listed_by_time() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    app.book(&token, "Later", "2024-05-03T10:00:00Z").await;
    app.book(&token, "Earliest", "2024-05-01T08:00:00+00:00").await;
    app.book(&token, "Middle", "2024-05-02T12:00").await;

    let (_, appointments) = app.get("/appointments", &token).await;
    let names: Vec<&str> = appointments
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["patientName"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Earliest", "Middle", "Later"]);
}

#[tokio::test]
async fn test_reschedule_patches_only_given_fields() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let booked = app.book(&token, "John Roe", "2024-05-01T09:30").await;
    let uri = format!("/appointments/{}", booked["id"]);

    let (status, updated) = app
        .patch(&uri, &token, json!({ "time": "2024-05-02T14:00", "doctorId": 3 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["time"], "2024-05-02T14:00:00Z");
    assert_eq!(updated["doctorId"], 3);
    assert_eq!(updated["patientName"], "John Roe");
    assert_eq!(updated["reason"], "Checkup");
    assert_eq!(updated["status"], "Confirmed");
    assert_eq!(updated["patientId"], booked["patientId"]);

    let (status, _) = app
        .patch("/appointments/999", &token, json!({ "reason": "Lab results" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cancel_keeps_appointment_listed() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let booked = app.book(&token, "John Roe", "2024-05-01T09:30").await;
    let uri = format!("/appointments/{}", booked["id"]);

    let (status, body) = app.request(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (_, appointments) = app.get("/appointments", &token).await;
    let appointments = appointments.as_array().unwrap();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0]["status"], "Canceled");

    let (status, body) = app
        .request(Method::DELETE, "/appointments/999", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Appointment with ID \"999\" not found");
}

// =============================================================================
// Health & docs
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let app = TestApp::spawn().await;

    let (status, body) = app.request(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = TestApp::spawn().await;

    let (status, doc) = app
        .request(Method::GET, "/api-docs/openapi.json", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    for path in [
        "/auth/signup",
        "/auth/signin",
        "/patients",
        "/patients/{id}/status",
        "/doctors",
        "/appointments",
        "/appointments/{id}",
    ] {
        assert!(doc["paths"].get(path).is_some(), "missing {}", path);
    }
}

//! Client-side forms. Checks here stop a request before it is sent.

use serde::Serialize;
use validator::Validate;

use crate::domain::{PatientPriority, PatientStatus};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Validate)]
pub struct SignupForm {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct PatientForm {
    #[validate(length(min = 1, message = "Patient name is required"))]
    pub name: String,
    pub priority: PatientPriority,
}

/// Status change; without a doctor the assignment is cleared server-side
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StatusForm {
    pub status: PatientStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attending_doctor_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentForm {
    #[validate(length(min = 1, message = "Patient name is required"))]
    pub patient_name: String,
    #[validate(length(min = 1, message = "Reason is required"))]
    pub reason: String,
    /// Sent as typed; the server accepts `YYYY-MM-DDTHH:MM` and RFC 3339
    #[validate(length(min = 1, message = "Date and time are required"))]
    pub time: String,
    pub doctor_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Patient name is required"))]
    pub patient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Date and time are required"))]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<i32>,
}

impl RescheduleForm {
    fn is_empty(&self) -> bool {
        self.patient_name.is_none()
            && self.reason.is_none()
            && self.time.is_none()
            && self.doctor_id.is_none()
    }
}

/// Run a form's rules, turning failures into field errors
pub fn check<F: Validate>(form: &F) -> AppResult<()> {
    form.validate().map_err(AppError::from)
}

pub fn check_reschedule(form: &RescheduleForm) -> AppResult<()> {
    if form.is_empty() {
        return Err(AppError::validation(
            "Nothing to change: pass --patient-name, --reason, --time or --doctor",
        ));
    }
    check(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldError;

    #[test]
    fn test_signup_rejects_short_password_before_sending() {
        let form = SignupForm {
            email: "desk@clinic.example".into(),
            password: "short".into(),
        };

        match check(&form) {
            Err(AppError::InvalidFields(fields)) => assert_eq!(
                fields,
                vec![FieldError::new(
                    "password",
                    "Password must be at least 8 characters long"
                )]
            ),
            other => panic!("expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_login_only_requires_fields() {
        let form = LoginForm {
            email: "desk@clinic.example".into(),
            password: "short".into(),
        };
        assert!(check(&form).is_ok());

        let empty = LoginForm {
            email: String::new(),
            password: String::new(),
        };
        assert!(matches!(check(&empty), Err(AppError::InvalidFields(f)) if f.len() == 2));
    }

    #[test]
    fn test_status_form_omits_missing_doctor() {
        let form = StatusForm {
            status: PatientStatus::WithDoctor,
            attending_doctor_id: None,
        };
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({ "status": "With Doctor" })
        );
    }

    #[test]
    fn test_appointment_form_uses_camel_case() {
        let form = AppointmentForm {
            patient_name: "John Roe".into(),
            reason: "Checkup".into(),
            time: "2024-05-01T09:30".into(),
            doctor_id: 2,
        };
        assert!(check(&form).is_ok());
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({
                "patientName": "John Roe",
                "reason": "Checkup",
                "time": "2024-05-01T09:30",
                "doctorId": 2
            })
        );
    }

    #[test]
    fn test_reschedule_needs_at_least_one_field() {
        assert!(matches!(
            check_reschedule(&RescheduleForm::default()),
            Err(AppError::Validation(_))
        ));

        let form = RescheduleForm {
            time: Some("2024-05-02T14:00".into()),
            ..Default::default()
        };
        assert!(check_reschedule(&form).is_ok());
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({ "time": "2024-05-02T14:00" })
        );
    }
}

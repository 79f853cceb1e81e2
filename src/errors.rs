//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A single rejected DTO field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Validation failed: {}", join_messages(.0))]
    InvalidFields(Vec<FieldError>),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Request to the front-desk API failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Error body returned by the front-desk API to the terminal client
    #[error("{message}")]
    Api { status: u16, message: String },

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

fn join_messages(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| f.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) | AppError::InvalidFields(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Jwt(_) => "AUTH_ERROR",
            AppError::Http(_) => "UPSTREAM_ERROR",
            AppError::Api { .. } => "API_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::InvalidCredentials | AppError::Jwt(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) | AppError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            AppError::Http(_) => StatusCode::BAD_GATEWAY,
            AppError::Api { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidFields(fields) => join_messages(fields),

            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Jwt(e) => {
                tracing::debug!("JWT error: {:?}", e);
                "Invalid or expired token".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = self.user_message();
        let fields = match self {
            AppError::InvalidFields(fields) => fields,
            _ => Vec::new(),
        };
        let body = ErrorResponse {
            status_code: status.as_u16(),
            error: code.to_string(),
            message,
            fields,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &str, id: impl std::fmt::Display) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str, id: impl std::fmt::Display) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(format!("{} with ID \"{}\"", entity, id)))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    FieldError::new(field.to_string(), message)
                })
            })
            .collect();

        // field_errors() is a HashMap
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::InvalidFields(fields)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NotFound("Patient".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::conflict("Email").status(), StatusCode::CONFLICT);
        assert_eq!(AppError::validation("bad").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidFields(vec![FieldError::new("name", "Name is required")]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_ok_or_not_found_names_the_record() {
        let missing: Option<i32> = None;
        let err = missing.ok_or_not_found("Appointment", 42).unwrap_err();
        assert_eq!(err.to_string(), "Appointment with ID \"42\" not found");
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("connection refused at 10.0.0.3");
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn test_validation_errors_become_sorted_field_errors() {
        use validator::Validate;

        #[derive(Validate)]
        struct Signup {
            #[validate(length(min = 1, message = "Name is required"))]
            name: String,
            #[validate(email)]
            email: String,
        }

        let errors = Signup {
            name: String::new(),
            email: "nope".into(),
        }
        .validate()
        .unwrap_err();

        match AppError::from(errors) {
            AppError::InvalidFields(fields) => assert_eq!(
                fields,
                vec![
                    FieldError::new("email", "email is invalid"),
                    FieldError::new("name", "Name is required"),
                ]
            ),
            other => panic!("expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_api_error_keeps_remote_status_and_message() {
        let err = AppError::Api {
            status: 409,
            message: "Email already exists".into(),
        };
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "Email already exists");
    }

    #[test]
    fn test_field_errors_are_joined_into_message() {
        let err = AppError::InvalidFields(vec![
            FieldError::new("name", "Name is required"),
            FieldError::new("priority", "Priority is invalid"),
        ]);
        assert_eq!(err.user_message(), "Name is required, Priority is invalid");
    }
}

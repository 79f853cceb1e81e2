//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::errors::{AppError, FieldError};

/// JSON body that has passed its `validator` rules.
///
/// Malformed bodies become 400 responses. Missing fields, wrong types and
/// rule violations also carry one entry per failed field.
///
/// ```rust,ignore
/// async fn create(ValidatedJson(payload): ValidatedJson<CreatePatientRequest>) {
///     // payload.name is non-empty here
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        let value: T = serde_path_to_error::deserialize(body).map_err(field_error)?;
        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// Attach a serde failure to the field it happened on.
fn field_error(err: serde_path_to_error::Error<serde_json::Error>) -> AppError {
    let path = err.path().to_string();
    let message = err.into_inner().to_string();

    // serde reports a missing field against its parent
    if let Some(name) = message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'))
    {
        let field = if path == "." {
            name.to_string()
        } else {
            format!("{}.{}", path, name)
        };
        let message = format!("{} is required", field);
        return AppError::InvalidFields(vec![FieldError::new(field, message)]);
    }

    if path == "." {
        return AppError::validation(message);
    }

    let message = format!("{}: {}", path, message);
    AppError::InvalidFields(vec![FieldError::new(path, message)])
}

//! HTTP client for the front-desk REST API.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use super::forms::{AppointmentForm, LoginForm, PatientForm, RescheduleForm, SignupForm, StatusForm};
use crate::config::CLIENT_TIMEOUT_SECONDS;
use crate::domain::{Appointment, Doctor, Patient, UserResponse};
use crate::errors::{AppError, AppResult, ErrorResponse};
use crate::services::TokenResponse;

/// Thin typed wrapper over the REST endpoints
#[derive(Debug, Clone)]
pub struct FrontDeskClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl FrontDeskClient {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(CLIENT_TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach a bearer token to every subsequent request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let response = ensure_success(request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.fetch(self.request(Method::GET, path)).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(self.request(method, path).json(body)).await
    }

    pub async fn signup(&self, form: &SignupForm) -> AppResult<UserResponse> {
        self.send_json(Method::POST, "/auth/signup", form).await
    }

    pub async fn signin(&self, form: &LoginForm) -> AppResult<TokenResponse> {
        self.send_json(Method::POST, "/auth/signin", form).await
    }

    pub async fn patients(&self) -> AppResult<Vec<Patient>> {
        self.get("/patients").await
    }

    pub async fn add_patient(&self, form: &PatientForm) -> AppResult<Patient> {
        self.send_json(Method::POST, "/patients", form).await
    }

    pub async fn update_patient_status(&self, id: i32, form: &StatusForm) -> AppResult<Patient> {
        self.send_json(Method::PATCH, &format!("/patients/{}/status", id), form)
            .await
    }

    pub async fn doctors(&self) -> AppResult<Vec<Doctor>> {
        self.get("/doctors").await
    }

    pub async fn appointments(&self) -> AppResult<Vec<Appointment>> {
        self.get("/appointments").await
    }

    pub async fn book_appointment(&self, form: &AppointmentForm) -> AppResult<Appointment> {
        self.send_json(Method::POST, "/appointments", form).await
    }

    pub async fn reschedule_appointment(
        &self,
        id: i32,
        form: &RescheduleForm,
    ) -> AppResult<Appointment> {
        self.send_json(Method::PATCH, &format!("/appointments/{}", id), form)
            .await
    }

    /// Soft-cancel; the appointment stays listed as Canceled
    pub async fn cancel_appointment(&self, id: i32) -> AppResult<()> {
        let request = self.request(Method::DELETE, &format!("/appointments/{}", id));
        ensure_success(request.send().await?).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into [`AppError::Api`] carrying the server's message
async fn ensure_success(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unexpected response")
            .to_string(),
    };
    tracing::debug!(status = status.as_u16(), %message, "API request rejected");

    Err(AppError::Api {
        status: status.as_u16(),
        message,
    })
}

//! Patient queue service.
//!
//! Status changes are not guarded: any status may follow any other.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::domain::{queue_number, NewPatient, Patient, PatientStatusChange};
use crate::errors::{AppResult, OptionExt};
use crate::infra::PatientRepository;

#[async_trait]
pub trait PatientService: Send + Sync {
    /// Queue a walk-in patient as Waiting with the next queue number
    async fn create(&self, patient: NewPatient) -> AppResult<Patient>;

    /// All patients, earliest arrival first
    async fn find_all(&self) -> AppResult<Vec<Patient>>;

    /// Overwrite status and attending doctor
    async fn update_status(&self, id: i32, change: PatientStatusChange) -> AppResult<Patient>;
}

pub struct PatientManager {
    repo: Arc<dyn PatientRepository>,
}

impl PatientManager {
    pub fn new(repo: Arc<dyn PatientRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PatientService for PatientManager {
    async fn create(&self, patient: NewPatient) -> AppResult<Patient> {
        // Count then insert is not atomic; concurrent walk-ins can share a number.
        let existing = self.repo.count().await?;
        let queue_number = queue_number(existing);

        let patient = self.repo.create(patient, queue_number, Utc::now()).await?;
        tracing::info!(
            patient_id = patient.id,
            queue_number = %patient.queue_number,
            priority = %patient.priority,
            "Patient added to queue"
        );

        Ok(patient)
    }

    async fn find_all(&self) -> AppResult<Vec<Patient>> {
        self.repo.list_by_arrival().await
    }

    async fn update_status(&self, id: i32, change: PatientStatusChange) -> AppResult<Patient> {
        let patient = self
            .repo
            .update_status(id, change)
            .await?
            .ok_or_not_found("Patient", id)?;

        tracing::info!(patient_id = id, status = %patient.status, "Patient status changed");
        Ok(patient)
    }
}

//! Appointment scheduling service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    placeholder_patient_id, Appointment, AppointmentChanges, AppointmentStatus, NewAppointment,
};
use crate::errors::{AppResult, OptionExt};
use crate::infra::AppointmentRepository;

#[async_trait]
pub trait AppointmentService: Send + Sync {
    /// Book an appointment. Always stored as Confirmed.
    async fn create(&self, appointment: NewAppointment) -> AppResult<Appointment>;

    /// All appointments ordered by time, canceled ones included
    async fn find_all(&self) -> AppResult<Vec<Appointment>>;

    /// Reschedule or edit an appointment
    async fn update(&self, id: i32, changes: AppointmentChanges) -> AppResult<Appointment>;

    /// Cancel an appointment. The row is kept with status Canceled.
    async fn remove(&self, id: i32) -> AppResult<Appointment>;
}

pub struct AppointmentManager {
    repo: Arc<dyn AppointmentRepository>,
}

impl AppointmentManager {
    pub fn new(repo: Arc<dyn AppointmentRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AppointmentService for AppointmentManager {
    async fn create(&self, appointment: NewAppointment) -> AppResult<Appointment> {
        let appointment = self
            .repo
            .create(appointment, AppointmentStatus::Confirmed, placeholder_patient_id())
            .await?;

        tracing::info!(
            appointment_id = appointment.id,
            doctor_id = appointment.doctor_id,
            time = %appointment.time,
            "Appointment booked"
        );
        Ok(appointment)
    }

    async fn find_all(&self) -> AppResult<Vec<Appointment>> {
        self.repo.list_by_time().await
    }

    async fn update(&self, id: i32, changes: AppointmentChanges) -> AppResult<Appointment> {
        let appointment = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_not_found("Appointment", id)?;

        tracing::info!(appointment_id = id, "Appointment updated");
        Ok(appointment)
    }

    async fn remove(&self, id: i32) -> AppResult<Appointment> {
        let appointment = self
            .repo
            .set_status(id, AppointmentStatus::Canceled)
            .await?
            .ok_or_not_found("Appointment", id)?;

        tracing::info!(appointment_id = id, "Appointment canceled");
        Ok(appointment)
    }
}

//! Appointment repository.

use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::base::{ReadRepository, WriteRepository};
use super::entities::appointment::{self, ActiveModel, Entity as AppointmentEntity};
use crate::domain::{Appointment, AppointmentChanges, AppointmentStatus, NewAppointment};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Insert an appointment with the given status and placeholder patient id
    async fn create(
        &self,
        appointment: NewAppointment,
        status: AppointmentStatus,
        patient_id: String,
    ) -> AppResult<Appointment>;

    /// All appointments, earliest time first (canceled ones included)
    async fn list_by_time(&self) -> AppResult<Vec<Appointment>>;

    /// Merge the provided fields into the stored row; `None` if the id is unknown
    async fn update(&self, id: i32, changes: AppointmentChanges) -> AppResult<Option<Appointment>>;

    /// Overwrite the status only; `None` if the id is unknown
    async fn set_status(&self, id: i32, status: AppointmentStatus)
        -> AppResult<Option<Appointment>>;
}

pub struct AppointmentStore {
    db: DatabaseConnection,
}

impl AppointmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<AppointmentEntity> for AppointmentStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<AppointmentEntity, ActiveModel> for AppointmentStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl AppointmentRepository for AppointmentStore {
    async fn create(
        &self,
        appointment: NewAppointment,
        status: AppointmentStatus,
        patient_id: String,
    ) -> AppResult<Appointment> {
        let active_model = ActiveModel {
            id: NotSet,
            patient_id: Set(patient_id),
            patient_name: Set(appointment.patient_name),
            reason: Set(appointment.reason),
            time: Set(appointment.time),
            status: Set(status.to_string()),
            doctor_id: Set(appointment.doctor_id),
        };

        let model = self.insert_model(active_model).await?;
        Appointment::try_from(model)
    }

    async fn list_by_time(&self) -> AppResult<Vec<Appointment>> {
        AppointmentEntity::find()
            .order_by_asc(appointment::Column::Time)
            .order_by_asc(appointment::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Appointment::try_from)
            .collect()
    }

    async fn update(&self, id: i32, changes: AppointmentChanges) -> AppResult<Option<Appointment>> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Appointment::try_from(model).map(Some);
        }

        let mut active: ActiveModel = model.into();
        if let Some(patient_name) = changes.patient_name {
            active.patient_name = Set(patient_name);
        }
        if let Some(reason) = changes.reason {
            active.reason = Set(reason);
        }
        if let Some(time) = changes.time {
            active.time = Set(time);
        }
        if let Some(doctor_id) = changes.doctor_id {
            active.doctor_id = Set(doctor_id);
        }

        let model = self.update_model(active).await?;
        Appointment::try_from(model).map(Some)
    }

    async fn set_status(
        &self,
        id: i32,
        status: AppointmentStatus,
    ) -> AppResult<Option<Appointment>> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.status = Set(status.to_string());

        let model = self.update_model(active).await?;
        Appointment::try_from(model).map(Some)
    }
}

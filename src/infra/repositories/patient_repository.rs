//! Patient queue repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::base::{ReadRepository, WriteRepository};
use super::entities::patient::{self, ActiveModel, Entity as PatientEntity};
use crate::domain::{NewPatient, Patient, PatientStatus, PatientStatusChange};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Number of patients ever queued (rows are never deleted)
    async fn count(&self) -> AppResult<u64>;

    /// Insert a waiting patient with the given queue number and arrival time
    async fn create(
        &self,
        patient: NewPatient,
        queue_number: String,
        arrival: DateTime<Utc>,
    ) -> AppResult<Patient>;

    /// All patients, earliest arrival first
    async fn list_by_arrival(&self) -> AppResult<Vec<Patient>>;

    /// Overwrite status and attending doctor; `None` if the id is unknown
    async fn update_status(&self, id: i32, change: PatientStatusChange)
        -> AppResult<Option<Patient>>;
}

pub struct PatientStore {
    db: DatabaseConnection,
}

impl PatientStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<PatientEntity> for PatientStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<PatientEntity, ActiveModel> for PatientStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl PatientRepository for PatientStore {
    async fn count(&self) -> AppResult<u64> {
        self.count_rows().await
    }

    async fn create(
        &self,
        patient: NewPatient,
        queue_number: String,
        arrival: DateTime<Utc>,
    ) -> AppResult<Patient> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(patient.name),
            queue_number: Set(queue_number),
            arrival: Set(arrival),
            status: Set(PatientStatus::Waiting.to_string()),
            priority: Set(patient.priority.to_string()),
            attending_doctor_id: Set(None),
        };

        let model = self.insert_model(active_model).await?;
        Patient::try_from(model)
    }

    async fn list_by_arrival(&self) -> AppResult<Vec<Patient>> {
        PatientEntity::find()
            .order_by_asc(patient::Column::Arrival)
            .order_by_asc(patient::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Patient::try_from)
            .collect()
    }

    async fn update_status(
        &self,
        id: i32,
        change: PatientStatusChange,
    ) -> AppResult<Option<Patient>> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.status = Set(change.status.to_string());
        active.attending_doctor_id = Set(change.attending_doctor_id);

        let model = self.update_model(active).await?;
        Patient::try_from(model).map(Some)
    }
}

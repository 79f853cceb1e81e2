//! Doctor roster repository.

use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::base::ReadRepository;
use super::entities::doctor::{self, ActiveModel, Entity as DoctorEntity};
use crate::domain::Doctor;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// All doctors ordered by id
    async fn list(&self) -> AppResult<Vec<Doctor>>;

    async fn count(&self) -> AppResult<u64>;

    /// Insert `(name, specialization)` rows in one statement
    async fn insert_many(&self, doctors: Vec<(String, String)>) -> AppResult<()>;
}

pub struct DoctorStore {
    db: DatabaseConnection,
}

impl DoctorStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<DoctorEntity> for DoctorStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl DoctorRepository for DoctorStore {
    async fn list(&self) -> AppResult<Vec<Doctor>> {
        let models = DoctorEntity::find()
            .order_by_asc(doctor::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Doctor::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        self.count_rows().await
    }

    async fn insert_many(&self, doctors: Vec<(String, String)>) -> AppResult<()> {
        if doctors.is_empty() {
            return Ok(());
        }

        let rows = doctors.into_iter().map(|(name, specialization)| ActiveModel {
            id: NotSet,
            name: Set(name),
            specialization: Set(specialization),
        });

        DoctorEntity::insert_many(rows).exec(&self.db).await?;
        Ok(())
    }
}

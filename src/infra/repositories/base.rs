//! Base repository traits shared by the concrete stores.
//!
//! Stores implement these for their SeaORM entity and get the common
//! queries for free; the domain-facing repository traits build on them.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, PrimaryKeyTrait,
};

use crate::errors::AppResult;

/// Read operations (Query)
#[async_trait]
pub trait ReadRepository<E>: Send + Sync
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Find model by primary key
    async fn find_model(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> AppResult<Option<E::Model>>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Send,
    {
        E::find_by_id(id).one(self.db()).await.map_err(Into::into)
    }

    /// Count all rows
    async fn count_rows(&self) -> AppResult<u64> {
        E::find().count(self.db()).await.map_err(Into::into)
    }
}

/// Write operations (Command)
#[async_trait]
pub trait WriteRepository<E, A>: Send + Sync
where
    E: EntityTrait,
    E::Model: Send + Sync + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Insert a new row
    async fn insert_model(&self, model: A) -> AppResult<E::Model> {
        model.insert(self.db()).await.map_err(Into::into)
    }

    /// Save changed columns of an existing row
    async fn update_model(&self, model: A) -> AppResult<E::Model> {
        model.update(self.db()).await.map_err(Into::into)
    }
}

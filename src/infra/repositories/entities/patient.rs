//! Patient database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Patient;
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "patients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Not unique: derived from the row count at insert time
    pub queue_number: String,
    pub arrival: DateTimeUtc,
    pub status: String,
    pub priority: String,
    pub attending_doctor_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Patient {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Patient {
            id: model.id,
            name: model.name,
            queue_number: model.queue_number,
            arrival: model.arrival,
            status: model.status.parse().map_err(corrupt_column)?,
            priority: model.priority.parse().map_err(corrupt_column)?,
            attending_doctor_id: model.attending_doctor_id,
        })
    }
}

fn corrupt_column(err: AppError) -> AppError {
    AppError::internal(format!("patients row holds an unexpected value: {}", err))
}

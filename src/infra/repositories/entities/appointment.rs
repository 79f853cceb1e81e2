//! Appointment database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Appointment;
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub patient_id: String,
    pub patient_name: String,
    pub reason: String,
    pub time: DateTimeUtc,
    pub status: String,
    pub doctor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::doctor::Entity",
        from = "Column::DoctorId",
        to = "super::doctor::Column::Id"
    )]
    Doctor,
}

impl Related<super::doctor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Doctor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Appointment {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let status = model.status.parse().map_err(|e| {
            AppError::internal(format!("appointments row holds an unexpected value: {}", e))
        })?;

        Ok(Appointment {
            id: model.id,
            patient_id: model.patient_id,
            patient_name: model.patient_name,
            reason: model.reason,
            time: model.time,
            status,
            doctor_id: model.doctor_id,
        })
    }
}

//! Doctor database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Doctor;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doctors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub specialization: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointments,
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Doctor {
    fn from(model: Model) -> Self {
        Doctor {
            id: model.id,
            name: model.name,
            specialization: model.specialization,
        }
    }
}

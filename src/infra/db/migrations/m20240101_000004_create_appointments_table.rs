//! Migration: Create appointments table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Appointments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Appointments::PatientId).string().not_null())
                    .col(ColumnDef::new(Appointments::PatientName).string().not_null())
                    .col(ColumnDef::new(Appointments::Reason).string().not_null())
                    .col(
                        ColumnDef::new(Appointments::Time)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::Status)
                            .string_len(16)
                            .not_null()
                            .default("Pending"),
                    )
                    .col(ColumnDef::new(Appointments::DoctorId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointments_doctor_id")
                            .from(Appointments::Table, Appointments::DoctorId)
                            .to(Doctors::Table, Doctors::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointments_time")
                    .table(Appointments::Table)
                    .col(Appointments::Time)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Appointments {
    Table,
    Id,
    PatientId,
    PatientName,
    Reason,
    Time,
    Status,
    DoctorId,
}

#[derive(Iden)]
enum Doctors {
    Table,
    Id,
}

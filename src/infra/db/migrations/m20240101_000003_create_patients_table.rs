//! Migration: Create patients table for the walk-in queue.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Patients::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Patients::Name).string().not_null())
                    // No unique constraint: numbers come from the row count
                    .col(ColumnDef::new(Patients::QueueNumber).string().not_null())
                    .col(
                        ColumnDef::new(Patients::Arrival)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Patients::Status)
                            .string_len(16)
                            .not_null()
                            .default("Waiting"),
                    )
                    .col(
                        ColumnDef::new(Patients::Priority)
                            .string_len(16)
                            .not_null()
                            .default("Normal"),
                    )
                    .col(ColumnDef::new(Patients::AttendingDoctorId).integer().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_patients_arrival")
                    .table(Patients::Table)
                    .col(Patients::Arrival)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Patients::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Patients {
    Table,
    Id,
    Name,
    QueueNumber,
    Arrival,
    Status,
    Priority,
    AttendingDoctorId,
}

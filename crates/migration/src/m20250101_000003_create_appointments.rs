//! Create `appointments` table.
//! Totals are denormalized from the linked services at booking time.
use sea_orm_migration::{prelude::*, schema::*};

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
                    .col(pk_auto(Appointments::Id))
                    .col(integer(Appointments::MedspaId).not_null())
                    .col(timestamp_with_time_zone(Appointments::StartTime).not_null())
                    .col(decimal_len(Appointments::TotalPrice, 10, 2).not_null())
                    .col(integer(Appointments::TotalDuration).not_null())
                    .col(string_len(Appointments::Status, 16).not_null().default("scheduled"))
                    .col(timestamp_with_time_zone(Appointments::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Appointments::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointments_medspa")
                            .from(Appointments::Table, Appointments::MedspaId)
                            .to(Medspa::Table, Medspa::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Appointments::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Appointments {
    Table,
    Id,
    MedspaId,
    StartTime,
    TotalPrice,
    TotalDuration,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Medspa { Table, Id }

//! Create `medspa` table.
//!
//! Root entity; services and appointments reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Medspa::Table)
                    .if_not_exists()
                    .col(pk_auto(Medspa::Id))
                    .col(string(Medspa::Name).not_null())
                    .col(string(Medspa::Address).not_null())
                    .col(string_len(Medspa::PhoneNumber, 32).not_null())
                    .col(string(Medspa::EmailAddress).not_null())
                    .col(timestamp_with_time_zone(Medspa::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Medspa::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Medspa::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Medspa { Table, Id, Name, Address, PhoneNumber, EmailAddress, CreatedAt, UpdatedAt }

//! Create `services` table.
//! Bookable offerings priced in fixed-point currency, owned by one medspa.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(pk_auto(Services::Id))
                    .col(integer(Services::MedspaId).not_null())
                    .col(string(Services::Name).not_null())
                    .col(text(Services::Description).not_null())
                    .col(decimal_len(Services::Price, 10, 2).not_null())
                    .col(integer(Services::Duration).not_null())
                    .col(timestamp_with_time_zone(Services::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Services::UpdatedAt).not_null())
                    // No cascade: a medspa that still owns services cannot be removed
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_services_medspa")
                            .from(Services::Table, Services::MedspaId)
                            .to(Medspa::Table, Medspa::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    MedspaId,
    Name,
    Description,
    Price,
    Duration,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Medspa { Table, Id }

//! Create `appointments_services` join table.
//! No uniqueness on (appointment_id, service_id). Links go away with their
//! appointment; a service that is still booked cannot be deleted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppointmentsServices::Table)
                    .if_not_exists()
                    .col(pk_auto(AppointmentsServices::Id))
                    .col(integer(AppointmentsServices::AppointmentId).not_null())
                    .col(integer(AppointmentsServices::ServiceId).not_null())
                    .col(timestamp_with_time_zone(AppointmentsServices::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(AppointmentsServices::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointments_services_appointment")
                            .from(AppointmentsServices::Table, AppointmentsServices::AppointmentId)
                            .to(Appointments::Table, Appointments::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointments_services_service")
                            .from(AppointmentsServices::Table, AppointmentsServices::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AppointmentsServices::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AppointmentsServices {
    Table,
    Id,
    AppointmentId,
    ServiceId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Appointments { Table, Id }

#[derive(DeriveIden)]
enum Services { Table, Id }

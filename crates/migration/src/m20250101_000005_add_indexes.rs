use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Services: list by medspa
        manager
            .create_index(
                Index::create()
                    .name("idx_services_medspa")
                    .table(Services::Table)
                    .col(Services::MedspaId)
                    .to_owned(),
            )
            .await?;

        // Appointments: status filter and day-range scans
        manager
            .create_index(
                Index::create()
                    .name("idx_appointments_status")
                    .table(Appointments::Table)
                    .col(Appointments::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_appointments_start_time")
                    .table(Appointments::Table)
                    .col(Appointments::StartTime)
                    .to_owned(),
            )
            .await?;

        // Join rows: fetched and purged per appointment
        manager
            .create_index(
                Index::create()
                    .name("idx_appointments_services_appointment")
                    .table(AppointmentsServices::Table)
                    .col(AppointmentsServices::AppointmentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_appointments_services_appointment").table(AppointmentsServices::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_appointments_start_time").table(Appointments::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_appointments_status").table(Appointments::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_services_medspa").table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services { Table, MedspaId }

#[derive(DeriveIden)]
enum Appointments { Table, Status, StartTime }

#[derive(DeriveIden)]
enum AppointmentsServices { Table, AppointmentId }

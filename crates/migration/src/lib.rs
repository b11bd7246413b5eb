//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_medspa;
mod m20250101_000002_create_services;
mod m20250101_000003_create_appointments;
mod m20250101_000004_create_appointments_services;
mod m20250101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_medspa::Migration),
            Box::new(m20250101_000002_create_services::Migration),
            Box::new(m20250101_000003_create_appointments::Migration),
            Box::new(m20250101_000004_create_appointments_services::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000005_add_indexes::Migration),
        ]
    }
}

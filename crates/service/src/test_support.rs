#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use models::db::connect_with_config;

use crate::domain::{NewMedspa, NewService};

/// Private in-memory database per test, migrated with the real migrator.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn new_medspa(name: &str) -> NewMedspa {
    NewMedspa {
        name: name.to_string(),
        address: "123 Main St".into(),
        phone_number: "555-0100".into(),
        email_address: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
    }
}

pub fn new_service(medspa_id: i32, name: &str, price: i64, duration: i32) -> NewService {
    NewService {
        medspa_id,
        name: name.to_string(),
        description: format!("{} description", name),
        price: Decimal::from(price),
        duration,
    }
}

//! Populate an empty database with the demo medspas and services.

use dotenvy::dotenv;
use migration::MigratorTrait;
use service::seed::{seed_database, SeedOutcome};
use tracing::{error, info};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    match run().await {
        Ok(SeedOutcome::Seeded { medspas, services }) => {
            info!(service = "seed", event = "done", medspas, services, "database seeded successfully");
            std::process::ExitCode::SUCCESS
        }
        Ok(SeedOutcome::Skipped) => {
            info!(service = "seed", event = "skipped", "database already has data");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "seed", event = "failed", error = %e, "error seeding database");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<SeedOutcome> {
    let cfg = configs::AppConfig::load()?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(seed_database(&db).await?)
}

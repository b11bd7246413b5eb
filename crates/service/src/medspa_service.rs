use sea_orm::{DatabaseConnection, IntoActiveModel};
use tracing::{info, instrument};

use models::medspa;
use crate::domain::{MedspaPatch, NewMedspa};
use crate::errors::ServiceError;
use crate::repository::MEDSPAS;

/// List all medspas.
pub async fn list_medspas(db: &DatabaseConnection) -> Result<Vec<medspa::Model>, ServiceError> {
    MEDSPAS.list(db, Vec::new()).await
}

/// Get medspa by id.
pub async fn get_medspa(db: &DatabaseConnection, id: i32) -> Result<medspa::Model, ServiceError> {
    MEDSPAS.get(db, id).await
}

#[instrument(skip_all, fields(name = %input.name))]
pub async fn create_medspa(db: &DatabaseConnection, input: NewMedspa) -> Result<medspa::Model, ServiceError> {
    let created = MEDSPAS.create(db, input.into_active_model()).await?;
    info!(medspa_id = created.id, "medspa created");
    Ok(created)
}

/// Merge `patch` over the stored medspa.
pub async fn update_medspa(db: &DatabaseConnection, id: i32, patch: MedspaPatch) -> Result<medspa::Model, ServiceError> {
    MEDSPAS.update(db, id, patch.into_active_model()).await
}

/// Fails with `Conflict` while services or appointments still reference it.
#[instrument(skip(db))]
pub async fn delete_medspa(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    MEDSPAS.delete(db, id).await?;
    info!("medspa deleted");
    Ok(())
}

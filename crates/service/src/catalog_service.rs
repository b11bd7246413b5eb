use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, IntoActiveModel};
use tracing::{info, instrument};

use models::services;
use crate::domain::{NewService, ServicePatch};
use crate::errors::ServiceError;
use crate::repository::{MEDSPAS, SERVICES};

fn ensure_non_negative(price: Option<Decimal>, duration: Option<i32>) -> Result<(), ServiceError> {
    if price.is_some_and(|p| p < Decimal::ZERO) {
        return Err(ServiceError::Invalid("price must not be negative".into()));
    }
    if duration.is_some_and(|d| d < 0) {
        return Err(ServiceError::Invalid("duration must not be negative".into()));
    }
    Ok(())
}

/// List services, optionally only those of one medspa. An unknown medspa
/// yields an empty list.
pub async fn list_services(db: &DatabaseConnection, medspa_id: Option<i32>) -> Result<Vec<services::Model>, ServiceError> {
    let filters = match medspa_id {
        Some(id) => vec![(services::Column::MedspaId, id.into())],
        None => Vec::new(),
    };
    SERVICES.list(db, filters).await
}

pub async fn get_service(db: &DatabaseConnection, id: i32) -> Result<services::Model, ServiceError> {
    SERVICES.get(db, id).await
}

/// The owning medspa must exist; otherwise `Medspa not found`.
#[instrument(skip_all, fields(medspa_id = input.medspa_id, name = %input.name))]
pub async fn create_service(db: &DatabaseConnection, input: NewService) -> Result<services::Model, ServiceError> {
    ensure_non_negative(Some(input.price), Some(input.duration))?;
    MEDSPAS.get(db, input.medspa_id).await?;
    let created = SERVICES.create(db, input.into_active_model()).await?;
    info!(service_id = created.id, price = %created.price, "service created");
    Ok(created)
}

/// Moving a service to a missing medspa is rejected as `Conflict`.
pub async fn update_service(db: &DatabaseConnection, id: i32, patch: ServicePatch) -> Result<services::Model, ServiceError> {
    ensure_non_negative(patch.price, patch.duration)?;
    SERVICES.update(db, id, patch.into_active_model()).await
}

/// Fails with `Conflict` while any appointment still books it.
#[instrument(skip(db))]
pub async fn delete_service(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    SERVICES.delete(db, id).await?;
    info!("service deleted");
    Ok(())
}

//! Appointment/service join rows.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use models::{appointments_services, services};

use super::AppointmentsServicesRepository;
use crate::errors::ServiceError;

impl AppointmentsServicesRepository {
    pub async fn list_by_appointment_id<C>(&self, db: &C, appointment_id: i32) -> Result<Vec<appointments_services::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        self.list(db, vec![(appointments_services::Column::AppointmentId, appointment_id.into())]).await
    }

    /// One join row per service, in the given order.
    pub async fn link_all<C>(&self, db: &C, appointment_id: i32, linked: &[services::Model]) -> Result<Vec<appointments_services::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        let mut rows = Vec::with_capacity(linked.len());
        for service in linked {
            let am = appointments_services::ActiveModel {
                appointment_id: Set(appointment_id),
                service_id: Set(service.id),
                ..Default::default()
            };
            rows.push(self.create(db, am).await?);
        }
        Ok(rows)
    }

    /// Returns the number of rows removed.
    pub async fn delete_by_appointment_id<C>(&self, db: &C, appointment_id: i32) -> Result<u64, ServiceError>
    where
        C: ConnectionTrait,
    {
        let res = appointments_services::Entity::delete_many()
            .filter(appointments_services::Column::AppointmentId.eq(appointment_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}

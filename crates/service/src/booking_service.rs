//! Appointment booking.
//!
//! An appointment's `total_price` and `total_duration` are the sums over the
//! services linked to it. Links and totals are written together in one
//! transaction, both on create and when an update replaces the services.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, DatabaseConnection, TransactionTrait};
use tracing::{debug, info, instrument};

use models::appointments::{self, AppointmentStatus};
use models::services;
use crate::domain::{AppointmentCreate, AppointmentDetail, AppointmentUpdate};
use crate::errors::ServiceError;
use crate::repository::scheduling::AppointmentFilter;
use crate::repository::{APPOINTMENTS, APPOINTMENTS_SERVICES, MEDSPAS, SERVICES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub price: Decimal,
    /// Minutes.
    pub duration: i32,
}

impl Totals {
    /// Fails with `Invalid` when either sum overflows.
    pub fn of(booked: &[services::Model]) -> Result<Self, ServiceError> {
        let mut totals = Self { price: Decimal::ZERO, duration: 0 };
        for service in booked {
            totals.price = totals
                .price
                .checked_add(service.price)
                .ok_or_else(|| ServiceError::Invalid("total price is too large".into()))?;
            totals.duration = totals
                .duration
                .checked_add(service.duration)
                .ok_or_else(|| ServiceError::Invalid("total duration is too large".into()))?;
        }
        Ok(totals)
    }
}

/// Book the requested services at the given medspa, starting now.
///
/// Unknown service ids and services of other medspas are dropped silently.
/// An id listed twice is booked once.
#[instrument(skip_all, fields(medspa_id = input.medspa_id, requested = input.services.len()))]
pub async fn create_appointment(db: &DatabaseConnection, input: AppointmentCreate) -> Result<appointments::Model, ServiceError> {
    let medspa = MEDSPAS.get(db, input.medspa_id).await?;
    let booked: Vec<services::Model> = SERVICES
        .get_many(db, &input.services)
        .await?
        .into_iter()
        .filter(|s| s.medspa_id == medspa.id)
        .collect();
    let totals = Totals::of(&booked)?;
    debug!(kept = booked.len(), price = %totals.price, duration = totals.duration, "services resolved");

    let txn = db.begin().await?;
    let appointment = APPOINTMENTS
        .create(&txn, appointments::ActiveModel {
            medspa_id: ActiveValue::Set(medspa.id),
            start_time: ActiveValue::Set(Utc::now().into()),
            total_price: ActiveValue::Set(totals.price),
            total_duration: ActiveValue::Set(totals.duration),
            status: ActiveValue::Set(AppointmentStatus::Scheduled),
            ..Default::default()
        })
        .await?;
    APPOINTMENTS_SERVICES.link_all(&txn, appointment.id, &booked).await?;
    txn.commit().await?;

    info!(appointment_id = appointment.id, "appointment booked");
    Ok(appointment)
}

/// Apply `input` to an existing appointment.
///
/// When `services` is present the links are replaced and the totals
/// recomputed from the resolved services. Ownership is not checked here:
/// services of another medspa are accepted.
#[instrument(skip(db, input))]
pub async fn update_appointment(db: &DatabaseConnection, id: i32, input: AppointmentUpdate) -> Result<appointments::Model, ServiceError> {
    let txn = db.begin().await?;
    APPOINTMENTS.get(&txn, id).await?;

    let mut patch = appointments::ActiveModel {
        medspa_id: input.medspa_id.map_or(ActiveValue::NotSet, ActiveValue::Set),
        status: input.status.map_or(ActiveValue::NotSet, ActiveValue::Set),
        ..Default::default()
    };
    if let Some(ids) = input.services {
        let linked = SERVICES.get_many(&txn, &ids).await?;
        let totals = Totals::of(&linked)?;
        patch.total_price = ActiveValue::Set(totals.price);
        patch.total_duration = ActiveValue::Set(totals.duration);

        let removed = APPOINTMENTS_SERVICES.delete_by_appointment_id(&txn, id).await?;
        APPOINTMENTS_SERVICES.link_all(&txn, id, &linked).await?;
        debug!(removed, linked = linked.len(), "services replaced");
    }

    let updated = APPOINTMENTS.update(&txn, id, patch).await?;
    txn.commit().await?;
    info!(status = ?updated.status, "appointment updated");
    Ok(updated)
}

/// The appointment plus its linked services, ordered by service id.
pub async fn get_appointment_detail(db: &DatabaseConnection, id: i32) -> Result<AppointmentDetail, ServiceError> {
    let appointment = APPOINTMENTS.get(db, id).await?;
    let service_ids: Vec<i32> = APPOINTMENTS_SERVICES
        .list_by_appointment_id(db, id)
        .await?
        .into_iter()
        .map(|link| link.service_id)
        .collect();
    let services = SERVICES.get_many(db, &service_ids).await?;
    Ok(AppointmentDetail { appointment, services })
}

pub async fn list_appointments(db: &DatabaseConnection, filter: &AppointmentFilter) -> Result<Vec<appointments::Model>, ServiceError> {
    APPOINTMENTS.list_filtered(db, filter).await
}

/// Its service links are removed with it.
#[instrument(skip(db))]
pub async fn delete_appointment(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    APPOINTMENTS.delete(db, id).await?;
    info!("appointment deleted");
    Ok(())
}

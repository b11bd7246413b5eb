//! Appointment listing by status and by calendar day.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use sea_orm::{prelude::DateTimeWithTimeZone, ColumnTrait, Condition, ConnectionTrait};
use serde::Deserialize;

use models::appointments::{self, AppointmentStatus};

use super::AppointmentsRepository;
use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
    /// Matches appointments starting on this UTC day.
    pub start_date: Option<NaiveDate>,
}

/// `[00:00 of date, 00:00 of the next day)` in UTC.
pub fn day_bounds(date: NaiveDate) -> (DateTimeWithTimeZone, DateTimeWithTimeZone) {
    let start = date.and_time(NaiveTime::MIN).and_utc().fixed_offset();
    (start, start + TimeDelta::days(1))
}

impl AppointmentsRepository {
    pub async fn list_filtered<C>(&self, db: &C, filter: &AppointmentFilter) -> Result<Vec<appointments::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        let mut condition = Condition::all();
        if let Some(status) = filter.status {
            condition = condition.add(appointments::Column::Status.eq(status));
        }
        if let Some(date) = filter.start_date {
            let (from, until) = day_bounds(date);
            condition = condition
                .add(appointments::Column::StartTime.gte(from))
                .add(appointments::Column::StartTime.lt(until));
        }
        self.list_where(db, condition).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{APPOINTMENTS, MEDSPAS};
    use crate::test_support::{get_db, new_medspa};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use sea_orm::{IntoActiveModel, Set};

    #[test]
    fn bounds_cover_exactly_one_day() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let (from, until) = day_bounds(date);
        assert_eq!(from.to_rfc3339(), "2024-02-28T00:00:00+00:00");
        assert_eq!(until.to_rfc3339(), "2024-02-29T00:00:00+00:00");
    }

    async fn book_at(db: &sea_orm::DatabaseConnection, medspa_id: i32, start: DateTimeWithTimeZone, status: AppointmentStatus) -> Result<appointments::Model, ServiceError> {
        APPOINTMENTS
            .create(db, appointments::ActiveModel {
                medspa_id: Set(medspa_id),
                start_time: Set(start),
                total_price: Set(Decimal::from(300)),
                total_duration: Set(90),
                status: Set(status),
                ..Default::default()
            })
            .await
    }

    #[tokio::test]
    async fn filters_by_status_and_day() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let spa = MEDSPAS.create(&db, new_medspa("Filters").into_active_model()).await?;

        let morning = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap().fixed_offset();
        let late = Utc.with_ymd_and_hms(2024, 5, 1, 23, 59, 59).unwrap().fixed_offset();
        let next_day = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap().fixed_offset();

        let a = book_at(&db, spa.id, morning, AppointmentStatus::Scheduled).await?;
        let b = book_at(&db, spa.id, late, AppointmentStatus::Cancelled).await?;
        let c = book_at(&db, spa.id, next_day, AppointmentStatus::Scheduled).await?;

        let scheduled = APPOINTMENTS
            .list_filtered(&db, &AppointmentFilter { status: Some(AppointmentStatus::Scheduled), start_date: None })
            .await?;
        assert_eq!(scheduled.iter().map(|m| m.id).collect::<Vec<_>>(), vec![a.id, c.id]);

        let may_first = AppointmentFilter { status: None, start_date: NaiveDate::from_ymd_opt(2024, 5, 1) };
        let on_day = APPOINTMENTS.list_filtered(&db, &may_first).await?;
        assert_eq!(on_day.iter().map(|m| m.id).collect::<Vec<_>>(), vec![a.id, b.id]);

        let both = AppointmentFilter { status: Some(AppointmentStatus::Cancelled), ..may_first };
        let cancelled_on_day = APPOINTMENTS.list_filtered(&db, &both).await?;
        assert_eq!(cancelled_on_day.len(), 1);
        assert_eq!(cancelled_on_day[0].id, b.id);

        let everything = APPOINTMENTS.list_filtered(&db, &AppointmentFilter::default()).await?;
        assert_eq!(everything.len(), 3);
        Ok(())
    }
}

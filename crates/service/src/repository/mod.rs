//! Generic CRUD over sea-orm entities.
//!
//! [`Record`] maps an entity to a display name and its bookkeeping columns.
//! [`BaseRepository`] implements list / get / get_many / create / update /
//! delete once for every entity that implements it. Entity-specific queries
//! live next to it as inherent impls on the concrete aliases
//! ([`scheduling`], [`links`]).
//!
//! Every method is generic over [`ConnectionTrait`], so the same calls run
//! against the pool or inside a transaction.

use std::marker::PhantomData;

use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait,
    Condition, ConnectionTrait, EntityTrait, IdenStatic, IntoActiveModel, Iterable, QueryFilter,
    QueryOrder, Value,
};

use models::{appointments, appointments_services, medspa, services};

use crate::errors::ServiceError;

pub mod links;
pub mod scheduling;

/// Schema mapping shared by every repository-managed entity.
pub trait Record: EntityTrait {
    /// Used in not-found messages.
    const NAME: &'static str;

    fn id_column() -> Self::Column;
    fn created_at_column() -> Self::Column;
    fn updated_at_column() -> Self::Column;
}

macro_rules! impl_record {
    ($module:ident, $name:literal) => {
        impl Record for $module::Entity {
            const NAME: &'static str = $name;

            fn id_column() -> $module::Column { $module::Column::Id }
            fn created_at_column() -> $module::Column { $module::Column::CreatedAt }
            fn updated_at_column() -> $module::Column { $module::Column::UpdatedAt }
        }
    };
}

impl_record!(medspa, "Medspa");
impl_record!(services, "Service");
impl_record!(appointments, "Appointment");
impl_record!(appointments_services, "AppointmentService");

/// Equality filters: every (column, value) pair must match.
pub type Filters<E> = Vec<(<E as EntityTrait>::Column, Value)>;

pub type MedspaRepository = BaseRepository<medspa::Entity>;
pub type ServicesRepository = BaseRepository<services::Entity>;
pub type AppointmentsRepository = BaseRepository<appointments::Entity>;
pub type AppointmentsServicesRepository = BaseRepository<appointments_services::Entity>;

pub const MEDSPAS: MedspaRepository = BaseRepository::new();
pub const SERVICES: ServicesRepository = BaseRepository::new();
pub const APPOINTMENTS: AppointmentsRepository = BaseRepository::new();
pub const APPOINTMENTS_SERVICES: AppointmentsServicesRepository = BaseRepository::new();

/// Stateless; the connection is passed to every call.
#[derive(Debug)]
pub struct BaseRepository<E> {
    entity: PhantomData<E>,
}

impl<E> BaseRepository<E> {
    pub const fn new() -> Self { Self { entity: PhantomData } }
}

impl<E> Default for BaseRepository<E> {
    fn default() -> Self { Self::new() }
}

impl<E> BaseRepository<E>
where
    E: Record,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
{
    /// All rows matching every filter, in id order. No filters lists everything.
    pub async fn list<C>(&self, db: &C, filters: Filters<E>) -> Result<Vec<E::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        let condition = filters
            .into_iter()
            .fold(Condition::all(), |cond, (column, value)| cond.add(column.eq(value)));
        self.list_where(db, condition).await
    }

    pub async fn list_where<C>(&self, db: &C, condition: Condition) -> Result<Vec<E::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        let rows = E::find()
            .filter(condition)
            .order_by_asc(E::id_column())
            .all(db)
            .await?;
        Ok(rows)
    }

    pub async fn get<C>(&self, db: &C, id: i32) -> Result<E::Model, ServiceError>
    where
        C: ConnectionTrait,
    {
        E::find()
            .filter(E::id_column().eq(id))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(E::NAME))
    }

    /// Rows whose id is in `ids`. Unknown ids are skipped, not reported.
    pub async fn get_many<C>(&self, db: &C, ids: &[i32]) -> Result<Vec<E::Model>, ServiceError>
    where
        C: ConnectionTrait,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = E::find()
            .filter(E::id_column().is_in(ids.iter().copied()))
            .order_by_asc(E::id_column())
            .all(db)
            .await?;
        Ok(rows)
    }

    pub async fn create<C>(&self, db: &C, mut am: E::ActiveModel) -> Result<E::Model, ServiceError>
    where
        C: ConnectionTrait,
    {
        let now: DateTimeWithTimeZone = Utc::now().into();
        am.set(E::created_at_column(), now.into());
        am.set(E::updated_at_column(), now.into());
        Ok(am.insert(db).await?)
    }

    /// Merge-patch: only columns `Set` in `patch` overwrite the stored row.
    /// The id column is never taken from the patch.
    pub async fn update<C>(&self, db: &C, id: i32, patch: E::ActiveModel) -> Result<E::Model, ServiceError>
    where
        C: ConnectionTrait,
    {
        let mut current = self.get(db, id).await?.into_active_model();
        let id_column = E::id_column();
        for column in E::Column::iter() {
            if column.as_str() == id_column.as_str() {
                continue;
            }
            if let ActiveValue::Set(value) = patch.get(column) {
                current.set(column, value);
            }
        }
        let now: DateTimeWithTimeZone = Utc::now().into();
        current.set(E::updated_at_column(), now.into());
        Ok(current.update(db).await?)
    }

    pub async fn delete<C>(&self, db: &C, id: i32) -> Result<(), ServiceError>
    where
        C: ConnectionTrait,
    {
        let current = self.get(db, id).await?;
        current.into_active_model().delete(db).await?;
        Ok(())
    }
}

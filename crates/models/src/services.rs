use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{appointments_services, medspa};

/// A bookable offering. `duration` is in minutes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub medspa_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[serde(with = "crate::money")]
    pub price: Decimal,
    pub duration: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Medspa,
    AppointmentsServices,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Medspa => Entity::belongs_to(medspa::Entity)
                .from(Column::MedspaId)
                .to(medspa::Column::Id)
                .into(),
            Relation::AppointmentsServices => Entity::has_many(appointments_services::Entity).into(),
        }
    }
}

impl Related<medspa::Entity> for Entity {
    fn to() -> RelationDef { Relation::Medspa.def() }
}

impl Related<appointments_services::Entity> for Entity {
    fn to() -> RelationDef { Relation::AppointmentsServices.def() }
}

impl ActiveModelBehavior for ActiveModel {}

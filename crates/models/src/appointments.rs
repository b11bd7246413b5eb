use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{appointments_services, medspa, services};

/// Any status may replace any other; there is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// A booking of one or more services. `total_price` and `total_duration`
/// are copied from the linked services whenever the links are written.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub medspa_id: i32,
    pub start_time: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[serde(with = "crate::money")]
    pub total_price: Decimal,
    pub total_duration: i32,
    pub status: AppointmentStatus,
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

// appointments <-> services through the join table
impl Related<services::Entity> for Entity {
    fn to() -> RelationDef { appointments_services::Relation::Service.def() }

    fn via() -> Option<RelationDef> {
        Some(appointments_services::Relation::Appointment.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

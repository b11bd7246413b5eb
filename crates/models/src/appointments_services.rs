use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{appointments, services};

/// Join row linking one appointment to one service. Duplicate links are allowed.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointments_services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub appointment_id: i32,
    pub service_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Appointment,
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Appointment => Entity::belongs_to(appointments::Entity)
                .from(Column::AppointmentId)
                .to(appointments::Column::Id)
                .into(),
            Relation::Service => Entity::belongs_to(services::Entity)
                .from(Column::ServiceId)
                .to(services::Column::Id)
                .into(),
        }
    }
}

impl Related<appointments::Entity> for Entity {
    fn to() -> RelationDef { Relation::Appointment.def() }
}

impl Related<services::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

impl ActiveModelBehavior for ActiveModel {}

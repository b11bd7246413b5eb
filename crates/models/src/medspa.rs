use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{appointments, services};

/// A medspa business; tenant of services and appointments.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "medspa")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub email_address: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Services,
    Appointments,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Services => Entity::has_many(services::Entity).into(),
            Relation::Appointments => Entity::has_many(appointments::Entity).into(),
        }
    }
}

impl Related<services::Entity> for Entity {
    fn to() -> RelationDef { Relation::Services.def() }
}

impl Related<appointments::Entity> for Entity {
    fn to() -> RelationDef { Relation::Appointments.def() }
}

impl ActiveModelBehavior for ActiveModel {}

//! Request and response shapes for the service layer.
//!
//! Create inputs carry every required column. Patch inputs are all-optional:
//! a field that is absent (or `null`) in the JSON body stays `NotSet` and the
//! stored value is kept.

use rust_decimal::Decimal;
use sea_orm::{ActiveValue, IntoActiveModel, Value};
use serde::{Deserialize, Serialize};

use models::appointments::{self, AppointmentStatus};
use models::{medspa, services};

fn set_if_present<V: Into<Value>>(value: Option<V>) -> ActiveValue<V> {
    value.map_or(ActiveValue::NotSet, ActiveValue::Set)
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMedspa {
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub email_address: String,
}

impl IntoActiveModel<medspa::ActiveModel> for NewMedspa {
    fn into_active_model(self) -> medspa::ActiveModel {
        medspa::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            phone_number: ActiveValue::Set(self.phone_number),
            email_address: ActiveValue::Set(self.email_address),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MedspaPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
}

impl IntoActiveModel<medspa::ActiveModel> for MedspaPatch {
    fn into_active_model(self) -> medspa::ActiveModel {
        medspa::ActiveModel {
            name: set_if_present(self.name),
            address: set_if_present(self.address),
            phone_number: set_if_present(self.phone_number),
            email_address: set_if_present(self.email_address),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewService {
    pub medspa_id: i32,
    pub name: String,
    pub description: String,
    #[serde(with = "models::money")]
    pub price: Decimal,
    /// Minutes.
    pub duration: i32,
}

impl IntoActiveModel<services::ActiveModel> for NewService {
    fn into_active_model(self) -> services::ActiveModel {
        services::ActiveModel {
            medspa_id: ActiveValue::Set(self.medspa_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            duration: ActiveValue::Set(self.duration),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServicePatch {
    pub medspa_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub duration: Option<i32>,
}

impl IntoActiveModel<services::ActiveModel> for ServicePatch {
    fn into_active_model(self) -> services::ActiveModel {
        services::ActiveModel {
            medspa_id: set_if_present(self.medspa_id),
            name: set_if_present(self.name),
            description: set_if_present(self.description),
            price: set_if_present(self.price),
            duration: set_if_present(self.duration),
            ..Default::default()
        }
    }
}

/// Booking request: the medspa and the ids of the services to book.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentCreate {
    pub medspa_id: i32,
    pub services: Vec<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppointmentUpdate {
    pub medspa_id: Option<i32>,
    pub status: Option<AppointmentStatus>,
    /// When present, replaces the booked services and recomputes totals.
    pub services: Option<Vec<i32>>,
}

/// An appointment together with the services linked to it.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentDetail {
    #[serde(flatten)]
    pub appointment: appointments::Model,
    pub services: Vec<services::Model>,
}

use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use models::appointments::{self, AppointmentStatus};
use service::booking_service;
use service::domain::{AppointmentCreate, AppointmentDetail, AppointmentUpdate};
use service::repository::scheduling::AppointmentFilter;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only appointments in this status.
    #[param(value_type = Option<crate::openapi::AppointmentStatusDoc>)]
    pub status: Option<AppointmentStatus>,
    /// `YYYY-MM-DD`; appointments starting that day (UTC).
    #[param(value_type = Option<String>, format = Date)]
    pub start_date: Option<NaiveDate>,
}

impl From<ListQuery> for AppointmentFilter {
    fn from(q: ListQuery) -> Self {
        Self { status: q.status, start_date: q.start_date }
    }
}

#[utoipa::path(
    get, path = "/appointments", tag = "appointments",
    params(ListQuery),
    responses(
        (status = 200, description = "Appointments", body = [crate::openapi::AppointmentDoc]),
        (status = 400, description = "Unknown status or malformed date")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<appointments::Model>>, ApiError> {
    let filter = AppointmentFilter::from(q);
    let list = booking_service::list_appointments(&state.db, &filter).await?;
    info!(count = list.len(), status = ?filter.status, start_date = ?filter.start_date, "list appointments");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/appointments/{id}", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment with its services", body = crate::openapi::AppointmentDetailDoc),
        (status = 404, description = "Appointment not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<AppointmentDetail>, ApiError> {
    Ok(Json(booking_service::get_appointment_detail(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/appointments", tag = "appointments",
    request_body = crate::openapi::AppointmentCreateDoc,
    responses(
        (status = 201, description = "Booked", body = crate::openapi::AppointmentDoc),
        (status = 404, description = "Medspa not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Invalid body or totals out of range")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<AppointmentCreate>,
) -> Result<(StatusCode, Json<appointments::Model>), ApiError> {
    let created = booking_service::create_appointment(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch, path = "/appointments/{id}", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = crate::openapi::AppointmentUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::AppointmentDoc),
        (status = 404, description = "Appointment not found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Target medspa does not exist", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<AppointmentUpdate>,
) -> Result<Json<appointments::Model>, ApiError> {
    Ok(Json(booking_service::update_appointment(&state.db, id, input).await?))
}

#[utoipa::path(
    delete, path = "/appointments/{id}", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Appointment not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    booking_service::delete_appointment(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

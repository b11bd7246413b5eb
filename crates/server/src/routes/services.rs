use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;

use models::services;
use service::catalog_service;
use service::domain::{NewService, ServicePatch};

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only services offered by this medspa.
    pub medspa_id: Option<i32>,
}

#[utoipa::path(
    get, path = "/services", tag = "services",
    params(ListQuery),
    responses((status = 200, description = "Services, optionally of one medspa", body = [crate::openapi::ServiceDoc]))
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<services::Model>>, ApiError> {
    Ok(Json(catalog_service::list_services(&state.db, q.medspa_id).await?))
}

#[utoipa::path(
    get, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Service not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<services::Model>, ApiError> {
    Ok(Json(catalog_service::get_service(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/services", tag = "services",
    request_body = crate::openapi::NewServiceDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Medspa not found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Invalid body, negative price or duration")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewService>,
) -> Result<(StatusCode, Json<services::Model>), ApiError> {
    let created = catalog_service::create_service(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service ID")),
    request_body = crate::openapi::ServicePatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Service not found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Target medspa does not exist", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Negative price or duration", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(patch): Json<ServicePatch>,
) -> Result<Json<services::Model>, ApiError> {
    Ok(Json(catalog_service::update_service(&state.db, id, patch).await?))
}

#[utoipa::path(
    delete, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Service not found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Service is booked on an appointment", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    catalog_service::delete_service(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

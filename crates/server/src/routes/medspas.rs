use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;

use models::medspa;
use service::domain::{MedspaPatch, NewMedspa};
use service::medspa_service;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/medspas", tag = "medspas",
    responses((status = 200, description = "All medspas", body = [crate::openapi::MedspaDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<medspa::Model>>, ApiError> {
    let list = medspa_service::list_medspas(&state.db).await?;
    info!(count = list.len(), "list medspas");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/medspas/{id}", tag = "medspas",
    params(("id" = i32, Path, description = "Medspa ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::MedspaDoc),
        (status = 404, description = "Medspa not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<medspa::Model>, ApiError> {
    Ok(Json(medspa_service::get_medspa(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/medspas", tag = "medspas",
    request_body = crate::openapi::NewMedspaDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MedspaDoc),
        (status = 422, description = "Invalid body")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewMedspa>,
) -> Result<(StatusCode, Json<medspa::Model>), ApiError> {
    let created = medspa_service::create_medspa(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch, path = "/medspas/{id}", tag = "medspas",
    params(("id" = i32, Path, description = "Medspa ID")),
    request_body = crate::openapi::MedspaPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MedspaDoc),
        (status = 404, description = "Medspa not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(patch): Json<MedspaPatch>,
) -> Result<Json<medspa::Model>, ApiError> {
    Ok(Json(medspa_service::update_medspa(&state.db, id, patch).await?))
}

#[utoipa::path(
    delete, path = "/medspas/{id}", tag = "medspas",
    params(("id" = i32, Path, description = "Medspa ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Medspa not found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Medspa still has services or appointments", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    medspa_service::delete_medspa(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Health, Welcome};

use crate::openapi::ApiDoc;

pub mod appointments;
pub mod medspas;
pub mod services;

/// Shared by every handler through axum `State`.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

#[utoipa::path(
    get, path = "/", tag = "health",
    responses((status = 200, description = "Welcome message with documentation links"))
)]
pub async fn root() -> Json<Welcome> {
    Json(Welcome::default())
}

/// Build the full application router: resources, docs and health.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // 集合路径同时接受带与不带结尾斜杠的写法
    let api = Router::new()
        .route("/medspas", get(medspas::list).post(medspas::create))
        .route("/medspas/", get(medspas::list).post(medspas::create))
        .route("/medspas/:id", get(medspas::get).patch(medspas::update).delete(medspas::delete))
        .route("/services", get(services::list).post(services::create))
        .route("/services/", get(services::list).post(services::create))
        .route("/services/:id", get(services::get).patch(services::update).delete(services::delete))
        .route("/appointments", get(appointments::list).post(appointments::create))
        .route("/appointments/", get(appointments::list).post(appointments::create))
        .route(
            "/appointments/:id",
            get(appointments::get).patch(appointments::update).delete(appointments::delete),
        );

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

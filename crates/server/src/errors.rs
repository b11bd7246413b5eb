use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::{error, warn};

/// Handler error; renders as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self { Self(err) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self.0 {
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServiceError::Conflict(msg) => {
                warn!(detail = %msg, "request conflicts with stored data");
                (StatusCode::CONFLICT, msg)
            }
            ServiceError::Invalid(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ServiceError::Db(msg) => {
                // 不向客户端暴露数据库细节
                error!(error = %msg, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };
        (status, Json(serde_json::json!({"detail": detail}))).into_response()
    }
}

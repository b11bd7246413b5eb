use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Message is client-facing, e.g. `Medspa not found`.
    #[error("{0}")]
    NotFound(String),
    /// A foreign key points at a missing row, or a row is still referenced.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Input the store cannot hold, e.g. a negative price.
    #[error("invalid: {0}")]
    Invalid(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                warn!(%detail, "foreign key violation");
                Self::Conflict("referenced record is missing or still in use".into())
            }
            _ => Self::Db(err.to_string()),
        }
    }
}

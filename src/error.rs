use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("validation errors")]
    Validation,

    #[error("Database error")]
    Db(#[from] sqlx::Error),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Constraint violations surfaced by the database (check, foreign key,
    /// not null, unique) count as client errors, everything else is a 500.
    fn is_constraint_violation(&self) -> bool {
        match self {
            AppError::Db(sqlx::Error::Database(db_err)) => matches!(
                db_err.kind(),
                ErrorKind::CheckViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::UniqueViolation
            ),
            _ => false,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": format!("{entity} not found") })),
            )
                .into_response(),
            AppError::Validation => validation_response(),
            err if err.is_constraint_violation() => validation_response(),
            err => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

// The error list is intentionally a constant: clients only get to know that
// validation failed, not which field.
fn validation_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "errors": ["validation errors"] })),
    )
        .into_response()
}

pub type AppResult<T> = Result<T, AppError>;

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// Field-level validation failures, rendered as the raw field map at 422.
    #[error("Validation failed")]
    Validation(HashMap<String, Vec<String>>),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    NotFound(String),

    /// Duplicate submission; the response body echoes the existing record.
    #[error("Conflict")]
    Conflict(serde_json::Value),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Database error")]
    DbError(#[from] sqlx::Error),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("The {} field is invalid.", field))
                })
                .collect();
            map.insert(field.to_string(), messages);
        }
        AppError::Validation(map)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(map) => {
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(map)).into_response()
            }
            AppError::Conflict(existing) => {
                (StatusCode::CONFLICT, axum::Json(existing)).into_response()
            }
            other => {
                let status = match &other {
                    AppError::Auth(_) => StatusCode::UNAUTHORIZED,
                    AppError::NotFound(_) => StatusCode::NOT_FOUND,
                    AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
                    AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let body = ApiResponse::<serde_json::Value>::failure(other.to_string());
                (status, axum::Json(body)).into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

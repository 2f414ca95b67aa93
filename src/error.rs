// region:    --- Imports
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

// endregion: --- Imports

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Raised by a stored procedure; carries only the database's message.
    #[error("{0}")]
    Procedure(String),

    #[error("{}", database_message(.0))]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Request(String),
}

impl AppError {
    /// Maps a failed procedure call: server-raised errors keep their message,
    /// anything else (connect, io, protocol) stays a generic database error.
    pub fn from_procedure(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => Self::Procedure(db_err.message().to_string()),
            other => Self::Database(other),
        }
    }
}

fn database_message(err: &sqlx::Error) -> String {
    match err.as_database_error() {
        Some(db_err) => db_err.message().to_string(),
        None => err.to_string(),
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Request(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match &self {
            AppError::Procedure(_) => warn!("{:<12} --> procedure rejected call: {}", "Error", message),
            AppError::Database(_) => warn!("{:<12} --> database error: {}", "Error", message),
            AppError::Request(_) => warn!("{:<12} --> bad request body: {}", "Error", message),
        }

        // every failure is reported as 400 with the message passed through
        (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
    }
}

// endregion: --- Tests

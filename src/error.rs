use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::submission::recorder::RecordError;

#[derive(Debug)]
pub enum AppError {
    BodyRead(String),
    Record(RecordError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BodyRead(msg) => write!(f, "Body Read Error: {msg}"),
            AppError::Record(err) => write!(f, "Record Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Unreadable bodies keep the 500 status existing clients see.
            AppError::BodyRead(msg) => {
                tracing::warn!("Error reading request body: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error reading request body".to_string(),
                )
            }
            AppError::Record(err) => {
                tracing::error!("Record error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        AppError::Record(err)
    }
}

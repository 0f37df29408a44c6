#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::clients::ClientError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Intent handlers convert the failures that have a conversational answer
/// (enrichment fallbacks, empty results) into directives themselves; whatever
/// reaches this type is the last-resort path.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("External client error: {0}")]
    Client(#[from] ClientError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::UnknownIntent(name) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_INTENT",
                format!("No handler is configured for intent '{name}'"),
            ),
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "A persistence error occurred".to_string(),
                )
            }
            AppError::Client(e) => {
                tracing::error!("External client error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CLIENT_ERROR",
                    "An external data source error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

pub mod items;

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::error::AppError;

pub const API_VERSION: &str = "1.0.0";

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "message": "Welcome to the Demo API",
            "version": API_VERSION,
        })),
    )
}

/// Fallback for paths no route claims, so clients always get a JSON body.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    models::{CreateItem, Item},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let items: Vec<Item> = state.items.read().await.list().cloned().collect();

    debug!(count = items.len(), "Listed items");

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "items": items,
            "count": items.len(),
        })),
    )
}

// ── Create ────────────────────────────────────────────────────────────────────

/// Any body the JSON extractor refuses (no content type, malformed JSON, a
/// non-string name) is treated the same as a body without a name.
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItem>, JsonRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(%rejection, "Rejected create body");
        AppError::MissingField("Name")
    })?;

    let item = state.items.write().await.create(payload)?;

    info!(id = item.id, name = %item.name, "Created item");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "item": item,
            "message": "Item created successfully",
        })),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let id = item_id(id)?;
    let item = state.items.read().await.get(id)?.clone();

    debug!(id, "Fetched item");

    Ok((StatusCode::OK, Json(serde_json::json!({ "item": item }))))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let id = item_id(id)?;
    state.items.write().await.delete(id)?;

    info!(id, "Deleted item");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Item deleted successfully" })),
    ))
}

/// A segment that isn't a non-negative integer can't name an item, so it
/// reads as a miss rather than a malformed request.
fn item_id(id: Result<Path<u64>, PathRejection>) -> AppResult<u64> {
    id.map(|Path(id)| id).map_err(|rejection| {
        debug!(%rejection, "Unparseable item id");
        AppError::NotFound("Item")
    })
}

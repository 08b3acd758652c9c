//! Demo Items API: a small axum service over an in-memory item collection.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod arithmetic;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

pub use crate::store::ItemStore;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone, Default)]
pub struct AppState {
    pub items: Arc<RwLock<ItemStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/", get(handlers::health))

        // ── Items ───────────────────────────────────────────────────────────
        .route(
            "/api/items",
            get(handlers::items::list_items).post(handlers::items::create_item),
        )
        .route(
            "/api/items/:id",
            get(handlers::items::get_item).delete(handlers::items::delete_item),
        )
        .fallback(handlers::not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

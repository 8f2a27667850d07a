// SPDX-License-Identifier: MIT

//! Clothing item routes: list and create.

use crate::db::ItemFilter;
use crate::error::{AppError, Result};
use crate::models::{ItemCreate, ItemResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/items", get(list_items).post(create_item))
}

/// List items, optionally filtered by exact category.
async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ItemFilter>,
) -> Result<Json<Vec<ItemResponse>>> {
    tracing::debug!(category = ?filter.category, "Listing items");

    let items = state.db.list_items(&filter).await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Create an item and return the stored record.
async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ItemCreate>,
) -> Result<Json<ItemResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = state.db.insert_item(&payload.into_item()).await?;
    tracing::info!(category = %item.category, "Item created");

    Ok(Json(ItemResponse::from(item)))
}

// SPDX-License-Identifier: MIT

//! Random outfit assembly.

use crate::error::Result;
use crate::models::{Item, ItemResponse};
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

/// Categories a complete outfit needs, drawn in this order.
const REQUIRED_CATEGORIES: [&str; 3] = ["Top", "Bottom", "Shoes"];

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/shuffle", get(shuffle_outfit))
}

#[derive(Serialize)]
pub struct ShuffleResponse {
    pub items: Vec<ItemResponse>,
    pub complete: bool,
}

/// Randomly pick one Top, one Bottom, and one Shoes.
///
/// Each category is an independent uniform draw via the store's `$sample`
/// stage; an empty category contributes nothing and is not an error.
async fn shuffle_outfit(State(state): State<Arc<AppState>>) -> Result<Json<ShuffleResponse>> {
    let mut selected = Vec::with_capacity(REQUIRED_CATEGORIES.len());
    for category in REQUIRED_CATEGORIES {
        if let Some(item) = state.db.sample_item(category).await? {
            selected.push(item);
        }
    }

    Ok(Json(assemble_response(selected)))
}

/// An outfit is complete only when every required category drew an item.
fn assemble_response(selected: Vec<Item>) -> ShuffleResponse {
    let complete = selected.len() == REQUIRED_CATEGORIES.len();
    ShuffleResponse {
        items: selected.into_iter().map(ItemResponse::from).collect(),
        complete,
    }
}

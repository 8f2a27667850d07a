// SPDX-License-Identifier: MIT

//! Outfit routes: list, create, favorite toggle.

use crate::db::{self, OutfitFilter};
use crate::error::{AppError, Result};
use crate::models::{FavoriteToggle, Outfit, OutfitCreate, OutfitResponse};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};
use std::collections::HashSet;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/outfits", get(list_outfits).post(create_outfit))
        .route("/api/outfits/{id}/favorite", patch(toggle_favorite))
}

/// List outfits newest first, optionally filtered on the favorite flag.
async fn list_outfits(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<OutfitFilter>,
) -> Result<Json<Vec<OutfitResponse>>> {
    tracing::debug!(favorite = ?filter.favorite, "Listing outfits");

    let outfits = state.db.list_outfits(&filter).await?;
    Ok(Json(outfits.into_iter().map(OutfitResponse::from).collect()))
}

/// Create an outfit after checking that every referenced item exists.
///
/// The existence check is a count over the distinct ids; it is a separate
/// read before the insert and is not transactional with respect to
/// concurrent item deletions (an accepted limitation). On rejection nothing
/// is persisted.
async fn create_outfit(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<OutfitCreate>,
) -> Result<Json<OutfitResponse>> {
    let mut ids = Vec::with_capacity(payload.items.len());
    for raw in &payload.items {
        ids.push(db::parse_object_id(raw)?);
    }

    // $in counts each stored document once, so compare against distinct ids.
    let distinct: Vec<_> = ids
        .into_iter()
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    let count = state.db.count_items_by_ids(&distinct).await?;
    if (count as usize) < distinct.len() {
        return Err(AppError::BadRequest(
            "One or more items not found".to_string(),
        ));
    }

    let outfit = Outfit {
        id: None,
        // Original id strings verbatim: order and duplicates preserved.
        items: payload.items,
        date_created: chrono::Utc::now(),
        is_favorite: payload.is_favorite,
        updated_at: None,
    };

    let stored = state.db.insert_outfit(&outfit).await?;
    tracing::info!(items = stored.items.len(), "Outfit created");

    Ok(Json(OutfitResponse::from(stored)))
}

/// Set an outfit's favorite flag and return the updated record.
async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Path(outfit_id): Path<String>,
    Json(payload): Json<FavoriteToggle>,
) -> Result<Json<OutfitResponse>> {
    let id = db::parse_object_id(&outfit_id)?;

    let matched = state
        .db
        .set_outfit_favorite(id, payload.is_favorite, chrono::Utc::now())
        .await?;
    if !matched {
        return Err(AppError::NotFound("Outfit not found".to_string()));
    }

    let outfit = state
        .db
        .find_outfit(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Outfit not found".to_string()))?;

    Ok(Json(OutfitResponse::from(outfit)))
}

// SPDX-License-Identifier: MIT

//! Outfit model for storage and API.

use crate::time_utils::{format_utc_rfc3339, optional_bson_datetime};
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// Stored outfit record.
///
/// `items` holds the referenced item ids as plain strings, order and
/// duplicates preserved from the creating request. Referential existence is
/// checked at creation only; later item deletions may leave dangling ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outfit {
    /// MongoDB document id (absent until inserted)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Ordered item id references
    pub items: Vec<String>,
    /// When the outfit was created
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub date_created: DateTime<Utc>,
    /// Starred/preferred flag
    pub is_favorite: bool,
    /// Set only when the favorite flag is toggled
    #[serde(
        default,
        with = "optional_bson_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Inbound payload for creating an outfit.
#[derive(Debug, Deserialize)]
pub struct OutfitCreate {
    /// Item ids to compose, in display order
    pub items: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Inbound payload for the favorite toggle.
#[derive(Debug, Deserialize)]
pub struct FavoriteToggle {
    pub is_favorite: bool,
}

/// Outfit as returned over the API: plain-string id, ISO-8601 timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct OutfitResponse {
    pub id: String,
    pub items: Vec<String>,
    pub date_created: String,
    pub is_favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Outfit> for OutfitResponse {
    fn from(outfit: Outfit) -> Self {
        Self {
            id: outfit.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            items: outfit.items,
            date_created: format_utc_rfc3339(outfit.date_created),
            is_favorite: outfit.is_favorite,
            updated_at: outfit.updated_at.map(format_utc_rfc3339),
        }
    }
}

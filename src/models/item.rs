// SPDX-License-Identifier: MIT

//! Clothing item model for storage and API.

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored clothing item record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// MongoDB document id (absent until inserted)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Public image URL of the item
    pub image_url: String,
    /// Recognized values: Top, Bottom, Shoes, Outerwear, Accessory.
    /// Stored as free text, not enforced as an enum.
    pub category: String,
    /// Recognized values: Summer, Winter, All
    pub season: String,
    /// Primary color
    pub color: Option<String>,
    /// Brand name
    pub brand: Option<String>,
    /// When the item was last worn (calendar date)
    pub last_worn_date: Option<NaiveDate>,
}

/// Inbound payload for creating an item.
#[derive(Debug, Deserialize, Validate)]
pub struct ItemCreate {
    #[validate(url(message = "image_url must be a well-formed URL"))]
    pub image_url: String,
    pub category: String,
    #[serde(default = "default_season")]
    pub season: String,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub last_worn_date: Option<NaiveDate>,
}

fn default_season() -> String {
    "All".to_string()
}

impl ItemCreate {
    /// Build the storage record for this payload.
    pub fn into_item(self) -> Item {
        Item {
            id: None,
            image_url: self.image_url,
            category: self.category,
            season: self.season,
            color: self.color,
            brand: self.brand,
            last_worn_date: self.last_worn_date,
        }
    }
}

/// Item as returned over the API: plain-string id, ISO-8601 dates.
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub id: String,
    pub image_url: String,
    pub category: String,
    pub season: String,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub last_worn_date: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            image_url: item.image_url,
            category: item.category,
            season: item.season,
            color: item.color,
            brand: item.brand,
            last_worn_date: item.last_worn_date.map(|d| d.to_string()),
        }
    }
}

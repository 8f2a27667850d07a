// SPDX-License-Identifier: MIT

//! MongoDB client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Items (clothing item storage and category queries)
//! - Outfits (composed outfits, favorite flag updates)
//! - Shuffle sampling (`$sample` aggregation)
//!
//! The wrapper also exposes the generic `create_document`/`get_documents`
//! pair that the typed operations are built on.

use crate::config::Config;
use crate::db::collections;
use crate::error::AppError;
use crate::models::{Item, Outfit};
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Client, Database};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// MongoDB database client.
#[derive(Clone)]
pub struct MongoDb {
    database: Option<Database>,
}

/// Query parameters for listing items.
#[derive(Debug, Default, Deserialize)]
pub struct ItemFilter {
    /// Exact (case-sensitive) category match
    pub category: Option<String>,
}

/// Query parameters for listing outfits.
#[derive(Debug, Default, Deserialize)]
pub struct OutfitFilter {
    /// Filter on the favorite flag
    pub favorite: Option<bool>,
}

impl MongoDb {
    /// Connect to MongoDB using the configured connection string.
    ///
    /// A missing or unparseable `DATABASE_URL` does not abort startup: the
    /// handle runs in offline mode and every store operation reports a
    /// database error, which `/test` surfaces as a diagnostic.
    pub async fn connect(config: &Config) -> Self {
        let Some(url) = &config.database_url else {
            tracing::warn!("DATABASE_URL not set, running without a database");
            return Self { database: None };
        };

        match Client::with_uri_str(url).await {
            Ok(client) => {
                tracing::info!(database = %config.database_name, "Connected to MongoDB");
                Self {
                    database: Some(client.database(&config.database_name)),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to initialize MongoDB client");
                Self { database: None }
            }
        }
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { database: None }
    }

    /// Helper to get the database or return an error if offline.
    fn get_database(&self) -> Result<&Database, AppError> {
        self.database
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// Database name, for the connectivity diagnostic.
    pub fn name(&self) -> Option<String> {
        self.database.as_ref().map(|db| db.name().to_string())
    }

    /// List collection names, for the connectivity diagnostic.
    pub async fn collection_names(&self) -> Result<Vec<String>, AppError> {
        self.get_database()?
            .list_collection_names()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Generic Document Operations ─────────────────────────────

    /// Insert a record into the named collection; returns the assigned id.
    pub async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<ObjectId, AppError> {
        let result = self
            .get_database()?
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Database("Insert returned a non-ObjectId id".to_string()))
    }

    /// Fetch all records in the named collection matching an equality filter.
    ///
    /// An empty filter returns the whole collection. No pagination; the
    /// wardrobe collections are small by design.
    pub async fn get_documents<T>(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        self.get_database()?
            .collection::<T>(collection)
            .find(filter)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Item Operations ─────────────────────────────────────────

    /// Insert an item and return the stored record.
    pub async fn insert_item(&self, item: &Item) -> Result<Item, AppError> {
        let document = mongodb::bson::to_document(item)
            .map_err(|e| AppError::Database(e.to_string()))?;
        let id = self.create_document(collections::ITEMS, document).await?;

        self.find_item(id)
            .await?
            .ok_or_else(|| AppError::Database("Inserted item not found".to_string()))
    }

    /// Get an item by id.
    pub async fn find_item(&self, id: ObjectId) -> Result<Option<Item>, AppError> {
        self.get_database()?
            .collection::<Item>(collections::ITEMS)
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List items, optionally restricted to one category.
    pub async fn list_items(&self, filter: &ItemFilter) -> Result<Vec<Item>, AppError> {
        let query = match &filter.category {
            Some(category) => doc! { "category": category },
            None => doc! {},
        };
        self.get_documents(collections::ITEMS, query).await
    }

    /// Count how many of the given ids exist as item records.
    ///
    /// `$in` matches each stored document at most once, so pass distinct ids
    /// when comparing against an expected count.
    pub async fn count_items_by_ids(&self, ids: &[ObjectId]) -> Result<u64, AppError> {
        self.get_database()?
            .collection::<Item>(collections::ITEMS)
            .count_documents(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Draw one item uniformly at random from a category.
    ///
    /// Uses the store's `$sample` aggregation stage, which is uniform over
    /// the current category population. Returns `None` for an empty category.
    pub async fn sample_item(&self, category: &str) -> Result<Option<Item>, AppError> {
        let pipeline = vec![
            doc! { "$match": { "category": category } },
            doc! { "$sample": { "size": 1 } },
        ];

        self.get_database()?
            .collection::<Item>(collections::ITEMS)
            .aggregate(pipeline)
            .with_type::<Item>()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .try_next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Outfit Operations ───────────────────────────────────────

    /// Insert an outfit and return the stored record.
    pub async fn insert_outfit(&self, outfit: &Outfit) -> Result<Outfit, AppError> {
        let document = mongodb::bson::to_document(outfit)
            .map_err(|e| AppError::Database(e.to_string()))?;
        let id = self.create_document(collections::OUTFITS, document).await?;

        self.find_outfit(id)
            .await?
            .ok_or_else(|| AppError::Database("Inserted outfit not found".to_string()))
    }

    /// Get an outfit by id.
    pub async fn find_outfit(&self, id: ObjectId) -> Result<Option<Outfit>, AppError> {
        self.get_database()?
            .collection::<Outfit>(collections::OUTFITS)
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List outfits newest first, optionally filtered on the favorite flag.
    ///
    /// Secondary sort on `_id` keeps the order deterministic when several
    /// outfits share a creation timestamp.
    pub async fn list_outfits(&self, filter: &OutfitFilter) -> Result<Vec<Outfit>, AppError> {
        let query = match filter.favorite {
            Some(favorite) => doc! { "is_favorite": favorite },
            None => doc! {},
        };

        self.get_database()?
            .collection::<Outfit>(collections::OUTFITS)
            .find(query)
            .sort(doc! { "date_created": -1, "_id": -1 })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update an outfit's favorite flag, stamping `updated_at`.
    ///
    /// Returns false when no outfit matches the id.
    pub async fn set_outfit_favorite(
        &self,
        id: ObjectId,
        is_favorite: bool,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = self
            .get_database()?
            .collection::<Outfit>(collections::OUTFITS)
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "is_favorite": is_favorite,
                    "updated_at": mongodb::bson::DateTime::from_chrono(updated_at),
                } },
            )
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.matched_count > 0)
    }
}

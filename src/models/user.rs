// SPDX-License-Identifier: MIT

//! User model.
//!
//! Part of the documented data model but not exposed by any endpoint yet;
//! no route creates, reads, or updates these records.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User profile record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Profile image URL
    pub profile_picture: Option<String>,
}

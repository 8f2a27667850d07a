// SPDX-License-Identifier: MIT

//! Database layer (MongoDB).

pub mod mongo;

pub use mongo::{ItemFilter, MongoDb, OutfitFilter};

use crate::error::AppError;
use mongodb::bson::oid::ObjectId;

/// Collection names as constants.
pub mod collections {
    pub const ITEMS: &str = "item";
    pub const OUTFITS: &str = "outfit";
}

/// Parse a client-supplied id string into a store-native ObjectId.
///
/// Malformed input is a client error; the message is part of the API.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::BadRequest("Invalid ID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_object_id() {
        let oid = parse_object_id("665f1f77bcf86cd799439011").unwrap();
        assert_eq!(oid.to_hex(), "665f1f77bcf86cd799439011");
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for raw in ["", "nope", "665f1f77bcf86cd79943901", "zzzf1f77bcf86cd799439011"] {
            let err = parse_object_id(raw).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "accepted {raw:?}");
        }
    }
}

//! # User documents
//!
//! Defines the two representations of a dashboard user:
//!
//! ## [`UserDocument`] (server only)
//!
//! One document of the `users` collection, mapped field by field through
//! serde so it can be read from a typed [`mongodb::Collection`]:
//!
//! - `_id`: the document's `ObjectId`.
//! - `username`, `email`, `profilePicture`: profile fields.
//! - `createdAt`: BSON datetime written when the account was created.
//! - `isAdmin`: whether the account may open this dashboard.
//!
//! Documents may carry more fields (password hashes, `updatedAt`, …); they
//! are ignored on read. [`UserDocument::to_record`] projects a document into
//! a [`UserRecord`].
//!
//! ## [`UserRecord`]
//!
//! The client-safe projection from the `directory` crate. It converts the
//! `ObjectId` to its hex string and the BSON datetime to a UTC timestamp so it
//! works in WASM.

pub use directory::UserRecord;

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use mongodb::bson::{self, oid::ObjectId};
#[cfg(feature = "server")]
use serde::{Deserialize, Serialize};

/// Collection the user documents live in.
#[cfg(feature = "server")]
pub const USERS_COLLECTION: &str = "users";

/// Full user document from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub profile_picture: String,
    pub created_at: bson::DateTime,
    #[serde(default)]
    pub is_admin: bool,
}

#[cfg(feature = "server")]
impl UserDocument {
    /// Convert to UserRecord for client consumption.
    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            id: self.id.to_hex(),
            username: self.username.clone(),
            email: self.email.clone(),
            profile_picture_url: self.profile_picture.clone(),
            created_at: DateTime::<Utc>::from_timestamp_millis(self.created_at.timestamp_millis())
                .unwrap_or_default(),
            is_admin: self.is_admin,
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_document_to_record() {
        let id = ObjectId::parse_str("65f1c0ffee0000000000abcd").unwrap();
        let raw = doc! {
            "_id": id,
            "username": "ada",
            "email": "ada@example.com",
            "profilePicture": "https://img.example.com/ada.png",
            "password": "$2a$10$hash",
            "createdAt": bson::DateTime::from_millis(1_709_285_400_000),
            "updatedAt": bson::DateTime::from_millis(1_709_285_400_000),
            "isAdmin": true,
        };

        let document: UserDocument = bson::from_document(raw).unwrap();
        let record = document.to_record();

        assert_eq!(record.id, "65f1c0ffee0000000000abcd");
        assert_eq!(record.profile_picture_url, "https://img.example.com/ada.png");
        assert_eq!(record.created_at.to_rfc3339(), "2024-03-01T09:30:00+00:00");
        assert_eq!(record.joined_date(), "2024-03-01");
        assert!(record.is_admin);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let raw = doc! {
            "_id": ObjectId::new(),
            "username": "bob",
            "email": "bob@example.com",
            "createdAt": bson::DateTime::from_millis(0),
        };

        let record = bson::from_document::<UserDocument>(raw).unwrap().to_record();
        assert_eq!(record.profile_picture_url, "");
        assert!(!record.is_admin);
        assert_eq!(record.role(), "User");
    }
}

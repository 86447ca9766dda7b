//! # User records as delivered by the collection endpoint
//!
//! [`UserRecord`] is the read-only projection of one user document. It is
//! `Serialize + Deserialize` so it can cross the server/client boundary via
//! Dioxus server functions, and it carries no server-only types so it builds
//! for WASM.
//!
//! ## Wire format
//!
//! JSON field names are camelCase:
//!
//! ```json
//! {
//!   "id": "65f1c0ffee...",
//!   "username": "ada",
//!   "email": "ada@example.com",
//!   "profilePictureUrl": "https://...",
//!   "createdAt": "2024-03-01T09:30:00Z",
//!   "isAdmin": false
//! }
//! ```
//!
//! Decoding also accepts the document store's own names, `_id` and
//! `profilePicture`, so a raw collection dump deserializes unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user's profile as shown in the admin dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique id of the backing document (hex object id).
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(alias = "profilePicture", default)]
    pub profile_picture_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserRecord {
    /// Role label shown in the table.
    pub fn role(&self) -> &'static str {
        if self.is_admin {
            "Admin"
        } else {
            "User"
        }
    }

    /// Calendar date the account was created, e.g. `2024-03-01`.
    pub fn joined_date(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

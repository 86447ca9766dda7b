//! # API crate: shared fullstack server functions for the admin dashboard
//!
//! This crate defines every Dioxus server function the dashboard calls, along
//! with the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`db`] | none | One-shot MongoDB connection (`OnceCell` singleton) and its error type |
//! | [`models`] | none | The `users` collection document (`UserDocument`) and its client-safe projection (`UserRecord`) |
//! | [`settings`] | `server` | Layered configuration (defaults, `config.toml`, environment) |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` and compiled twice: once with full server logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - `list_users`: `GET /api/admin`, the whole collection, unfiltered
//! - `get_user`: `GET /api/admin/users/:user_id`, one record for the detail screen

use dioxus::prelude::*;

pub mod db;
pub mod models;
#[cfg(feature = "server")]
pub mod settings;

pub use models::UserRecord;
#[cfg(feature = "server")]
pub use settings::Settings;

/// Fetch every user in the collection.
///
/// No filtering or paging happens here; the dashboard does both client-side.
#[cfg(feature = "server")]
#[get("/api/admin")]
pub async fn list_users() -> Result<Vec<UserRecord>, ServerFnError> {
    use futures::TryStreamExt;
    use models::{UserDocument, USERS_COLLECTION};

    let database = db::database().map_err(|e| ServerFnError::new(e.to_string()))?;

    let documents: Vec<UserDocument> = database
        .collection::<UserDocument>(USERS_COLLECTION)
        .find(mongodb::bson::doc! {})
        .await
        .map_err(|e| {
            tracing::error!("Failed to query users: {}", e);
            ServerFnError::new(e.to_string())
        })?
        .try_collect()
        .await
        .map_err(|e| {
            tracing::error!("Failed to read users: {}", e);
            ServerFnError::new(e.to_string())
        })?;

    Ok(documents.iter().map(UserDocument::to_record).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/admin")]
pub async fn list_users() -> Result<Vec<UserRecord>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch a single user by id. Malformed or unknown ids yield `None`.
#[cfg(feature = "server")]
#[get("/api/admin/users/:user_id")]
pub async fn get_user(user_id: String) -> Result<Option<UserRecord>, ServerFnError> {
    use mongodb::bson::{doc, oid::ObjectId};
    use models::{UserDocument, USERS_COLLECTION};

    let Ok(object_id) = ObjectId::parse_str(&user_id) else {
        return Ok(None);
    };

    let database = db::database().map_err(|e| ServerFnError::new(e.to_string()))?;

    let document = database
        .collection::<UserDocument>(USERS_COLLECTION)
        .find_one(doc! { "_id": object_id })
        .await
        .map_err(|e| {
            tracing::error!("Failed to load user {}: {}", user_id, e);
            ServerFnError::new(e.to_string())
        })?;

    Ok(document.map(|d| d.to_record()))
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/users/:user_id")]
pub async fn get_user(user_id: String) -> Result<Option<UserRecord>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

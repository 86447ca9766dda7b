//! One-shot MongoDB connection using the OnceCell pattern.

use mongodb::bson::doc;
use mongodb::{Client, Database};
use tokio::sync::OnceCell;

use super::DbError;
use crate::settings;

static DATABASE: OnceCell<Database> = OnceCell::const_new();

/// Open a client for `settings` and verify it with a single `ping`.
pub async fn connect(settings: &settings::Database) -> Result<Database, DbError> {
    let client = Client::with_uri_str(&settings.uri).await?;
    let database = client.database(&settings.name);
    database.run_command(doc! { "ping": 1 }).await?;
    Ok(database)
}

/// Attempt the startup connection once. Never fails: errors are logged and
/// the process carries on without a database.
pub async fn connect_db(settings: &settings::Database) {
    match connect(settings).await {
        Ok(database) => {
            if DATABASE.set(database).is_err() {
                tracing::warn!("MongoDB connection already initialised");
                return;
            }
            tracing::info!(database = %settings.name, "connected to MongoDB");
        }
        Err(e) => {
            tracing::error!("Error connecting to the database: {}", e);
        }
    }
}

/// Handle established by [`connect_db`].
pub fn database() -> Result<&'static Database, DbError> {
    DATABASE.get().ok_or(DbError::NotConnected)
}

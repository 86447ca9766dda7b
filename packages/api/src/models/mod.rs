//! Data models for the application.

mod user;

#[cfg(feature = "server")]
pub use user::{UserDocument, USERS_COLLECTION};
pub use user::UserRecord;

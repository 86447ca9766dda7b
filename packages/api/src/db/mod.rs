//! # Database module: MongoDB connection bootstrap
//!
//! The server makes exactly one connection attempt at startup through
//! [`connect_db`]. Success stores the database handle in a process-wide
//! [`tokio::sync::OnceCell`] and logs a confirmation; failure is logged and
//! swallowed so the HTTP server still comes up. There is no retry, no backoff
//! and no health-check loop.
//!
//! Server functions reach the handle through [`database`], which reports
//! [`DbError::NotConnected`] when the startup attempt failed.
//!
//! Everything here is gated behind `#[cfg(feature = "server")]` so that client
//! (WASM) builds never pull in the MongoDB driver.

#[cfg(feature = "server")]
mod connection;
#[cfg(feature = "server")]
mod error;

#[cfg(feature = "server")]
pub use connection::{connect, connect_db, database};
#[cfg(feature = "server")]
pub use error::DbError;

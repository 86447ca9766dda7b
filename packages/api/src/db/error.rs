use thiserror::Error;

/// Failures of the document store connection.
#[derive(Debug, Error)]
pub enum DbError {
    /// The driver rejected the URI or the server did not answer the ping.
    #[error("failed to connect to MongoDB: {0}")]
    Connection(#[from] mongodb::error::Error),
    /// The startup connection attempt did not succeed.
    #[error("MongoDB is not connected")]
    NotConnected,
}

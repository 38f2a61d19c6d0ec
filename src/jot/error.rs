use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotError {
    /// The durable snapshot exists but cannot be parsed. Callers are
    /// expected to fall back to an empty collection and keep going.
    #[error("Corrupt notes snapshot: {0}")]
    CorruptData(serde_json::Error),

    /// The collection could not be mirrored to the durable store. The
    /// in-memory collection is still authoritative for the session.
    #[error("Failed to persist notes: {0}")]
    PersistFailed(#[source] Box<JotError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, JotError>;

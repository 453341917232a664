//! Device-local persistence for client-side snapshots.

mod file;

pub use file::JsonFileStore;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

/// Storage key for the persisted cart snapshot.
pub const CART_ITEMS_KEY: &str = "cart_items";

/// Errors raised by the local store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem failure.
    #[error("storage io error")]
    Io(#[from] std::io::Error),

    /// The stored blob could not be serialized or deserialized.
    #[error("snapshot serialization error")]
    Serde(#[from] serde_json::Error),
}

/// Device-local key/value blob store.
#[automock]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Persist `bytes` under `key`, replacing any previous value.
    async fn save(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError>;

    /// Load the blob stored under `key`, or `None` when absent.
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Remove the blob stored under `key`. Absent keys are not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

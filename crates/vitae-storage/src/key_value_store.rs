use crate::Result as StorageResult;

use async_trait::async_trait;

/// String-keyed durable storage holding string values.
///
/// Reads of a key that was never written return `Ok(None)`. Removing a
/// missing key is not an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    async fn remove(&self, key: &str) -> StorageResult<()>;
}

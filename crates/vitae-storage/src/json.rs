//! Typed JSON access on top of a [`KeyValueStore`].

use crate::{KeyValueStore, Result as StorageResult, StorageError};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read and decode the value under `key`.
///
/// Returns `Ok(None)` when the key is absent and
/// [`StorageError::Corrupted`] when it holds something that does not decode.
pub async fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> StorageResult<Option<T>> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::corrupted(key, e.to_string()))
}

/// Encode `value` and store it under `key`.
pub async fn write_json<T: Serialize + ?Sized + Sync>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json).await
}

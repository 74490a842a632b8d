//! File-backed key-value store.
//!
//! Each key maps to one JSON file in the store directory. The file name is
//! the key with a leading `@` stripped and every character outside
//! `[A-Za-z0-9_-]` replaced by `_`, plus a `.json` extension.
//!
//! The mapping is not one-to-one: `@a.b`, `@a_b` and `a_b` all land in
//! `a_b.json`. Keys sharing a store must stay distinct after the mapping;
//! the well-known keys in [`crate::keys`] do.
//!
//! ## Atomic writes
//!
//! `set()` writes to a temp file, syncs it to disk, then renames it over
//! the final file, so a crash mid-write leaves either the old or the new
//! value, never a torn one.

use crate::{KeyValueStore, Result as StorageResult, StorageError};

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;
use tokio::fs;
use tokio::io::AsyncWriteExt;

const FILE_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at `root`, creating the directory now.
    pub async fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let store = Self::new(root);
        store.ensure_root().await?;
        Ok(store)
    }

    /// Path of the file holding `key`. Distinct keys may share a path;
    /// see the module docs.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{FILE_EXTENSION}", Self::file_stem(key)))
    }

    fn file_stem(key: &str) -> String {
        key.strip_prefix('@')
            .unwrap_or(key)
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    async fn ensure_root(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::io(self.root.clone(), e))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.ensure_root().await?;

        let final_path = self.path_for(key);
        let temp_path = final_path.with_extension(format!(
            "{FILE_EXTENSION}.tmp.{}",
            std::process::id()
        ));

        {
            let mut file = fs::File::create(&temp_path)
                .await
                .map_err(|e| StorageError::io(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .await
                .map_err(|e| StorageError::io(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| StorageError::io(temp_path.clone(), e))?;
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::atomic_rename(temp_path, final_path, e));
        }

        debug!("Stored '{key}' at {}", final_path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key);

        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Removed '{key}' at {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }
}

//! Durable key-value storage for the Vitae client.
//!
//! Everything the app persists lives under a handful of string keys
//! (see [`keys`]) holding JSON text. [`KeyValueStore`] is the seam; the
//! device build uses [`FileKeyValueStore`], tests use [`MemoryKeyValueStore`].

pub mod error;
pub mod file_store;
pub mod json;
pub mod key_value_store;
pub mod keys;
pub mod memory_store;


pub use error::{Result, StorageError};
pub use file_store::FileKeyValueStore;
pub use json::{read_json, write_json};
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryKeyValueStore;
